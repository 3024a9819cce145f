use std::sync::Arc;

use crate::client::core::AiGatewayClient;
use crate::config::{FeatureFlags, GatewayConfig};
use crate::media::sink::{default_sink, AudioSink};
use crate::transport::build_http_client;
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// Starts from [`GatewayConfig::default`], which has no credential; pass one
/// with [`api_key`](Self::api_key) or a full [`config`](Self::config).
pub struct AiGatewayClientBuilder {
    config: GatewayConfig,
    sink: Option<Arc<dyn AudioSink>>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl AiGatewayClientBuilder {
    pub fn new() -> Self {
        Self {
            config: GatewayConfig::default(),
            sink: None,
            base_url_override: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    pub fn text_model(mut self, model: impl Into<String>) -> Self {
        self.config.text_model = model.into();
        self
    }

    pub fn image_model(mut self, model: impl Into<String>) -> Self {
        self.config.image_model = model.into();
        self
    }

    pub fn speech_model(mut self, model: impl Into<String>) -> Self {
        self.config.speech_model = model.into();
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.config.features = features;
        self
    }

    /// Where voice samples are played. Defaults to the output device when the
    /// `playback` feature is enabled, otherwise to a sink that discards audio.
    pub fn audio_sink(mut self, sink: Arc<dyn AudioSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Override the service base URL.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Build the client.
    ///
    /// A missing credential is not an error here: each operation reports it
    /// through its own sentinel.
    pub fn build(self) -> Result<AiGatewayClient> {
        let mut config = self.config;
        if let Some(url) = self.base_url_override {
            config.base_url = url;
        }
        config.validate()?;

        if config.api_key.is_none() {
            tracing::warn!("no API key configured; every request will fail");
        }

        let http = build_http_client(config.timeout)?;
        Ok(AiGatewayClient {
            config,
            http,
            sink: self.sink.unwrap_or_else(default_sink),
        })
    }
}

impl Default for AiGatewayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
