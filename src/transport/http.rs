use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Build the shared reqwest client. Connections are pooled across calls.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .build()
        .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))
}

/// One authenticated connection to the `generateContent` endpoint.
///
/// Cheap to create: it borrows the pooled reqwest client and owns only the
/// endpoint and credential strings.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!(model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: remote_error_message(&bytes),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        debug!(
            model,
            candidates = parsed.candidates.len(),
            finish_reason = parsed.finish_reason().unwrap_or("-"),
            "generateContent reply received"
        );
        Ok(parsed)
    }
}

/// Pull `error.message` out of an error body, falling back to the raw text.
fn remote_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let t = HttpTransport::new(reqwest::Client::new(), "http://localhost:8080/", "k");
        assert_eq!(
            t.endpoint("gemini-2.5-flash"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_remote_error_message_extraction() {
        let body = br#"{"error":{"code":429,"message":"Resource exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(remote_error_message(body), "Resource exhausted");
        assert_eq!(remote_error_message(b"bad gateway"), "bad gateway");
    }
}
