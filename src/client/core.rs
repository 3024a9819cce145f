use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::error;

use crate::config::GatewayConfig;
use crate::media::AudioSink;
use crate::structured::{decode_json, response_text};
use crate::transport::HttpTransport;
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::Result;

use super::builder::AiGatewayClientBuilder;

/// Client for the songwriting features backed by the generative service.
///
/// Cloning is cheap; clones share the connection pool and audio sink.
/// Calls are independent of each other and may run concurrently.
#[derive(Clone)]
pub struct AiGatewayClient {
    pub(crate) config: GatewayConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) sink: Arc<dyn AudioSink>,
}

impl AiGatewayClient {
    pub fn builder() -> AiGatewayClientBuilder {
        AiGatewayClientBuilder::new()
    }

    /// Build a client from [`GatewayConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        AiGatewayClientBuilder::new()
            .config(GatewayConfig::from_env())
            .build()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Open an authenticated transport. Fails when no credential is configured.
    pub(crate) fn transport(&self) -> Result<HttpTransport> {
        let api_key = self.config.require_api_key()?;
        Ok(HttpTransport::new(
            self.http.clone(),
            self.config.base_url.clone(),
            api_key,
        ))
    }

    pub(crate) async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.transport()?.generate_content(model, request).await
    }

    /// Text-model call returning the trimmed reply text.
    pub(crate) async fn generate_text(&self, request: &GenerateContentRequest) -> Result<String> {
        let response = self.generate(&self.config.text_model, request).await?;
        response_text(&response)
    }

    /// Text-model call whose reply is decoded as JSON into `T`.
    pub(crate) async fn generate_json<T: DeserializeOwned>(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<T> {
        let response = self.generate(&self.config.text_model, request).await?;
        decode_json(&response)
    }
}

impl fmt::Debug for AiGatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiGatewayClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Collapse a failed operation into `None`, logging why.
pub(crate) fn or_none<T>(operation: &'static str, message: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let field = e.context().and_then(|c| c.field_path.as_deref());
            error!(operation, field, error = %e, "{}", message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorContext};

    #[test]
    fn test_or_none_keeps_success() {
        assert_eq!(or_none("lyrics", "unused", Ok::<_, Error>(7)), Some(7));
    }

    #[test]
    fn test_or_none_collapses_context_errors() {
        let err = Error::decode_with_context(
            "missing field",
            ErrorContext::new().with_field_path("sceneDescription"),
        );
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("sceneDescription")
        );
        assert_eq!(or_none::<u8>("visual_prompts", "decode failed", Err(err)), None);
    }
}
