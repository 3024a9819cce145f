//! Gateway configuration.
//!
//! The API credential and endpoint settings are plain values handed to the
//! client builder. [`GatewayConfig::from_env`] is the single place that reads
//! the process environment.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::{Error, ErrorContext, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Switches for features that may be turned off by the hosting app.
///
/// A disabled feature short-circuits to its failure sentinel without
/// touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub image_generation: bool,
    pub voice_preview: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            image_generation: true,
            voice_preview: true,
        }
    }
}

#[derive(Clone)]
pub struct GatewayConfig {
    /// Credential for the generative service. `None` makes every call fail
    /// gracefully with its sentinel.
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub speech_model: String,
    pub timeout: Duration,
    pub features: FeatureFlags,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            speech_model: DEFAULT_SPEECH_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            features: FeatureFlags::default(),
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("speech_model", &self.speech_model)
            .field("timeout", &self.timeout)
            .field("features", &self.features)
            .finish()
    }
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Load configuration from the environment.
    ///
    /// - `GEMINI_API_KEY` (falls back to `API_KEY`)
    /// - `SONGCRAFT_BASE_URL`
    /// - `SONGCRAFT_TEXT_MODEL`, `SONGCRAFT_IMAGE_MODEL`, `SONGCRAFT_SPEECH_MODEL`
    /// - `SONGCRAFT_HTTP_TIMEOUT_SECS` (default 60)
    /// - `SONGCRAFT_DISABLE_IMAGE`, `SONGCRAFT_DISABLE_VOICE` (`1` or `true`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| env::var("API_KEY").ok())
            .filter(|k| !k.trim().is_empty());

        Self {
            api_key,
            base_url: env::var("SONGCRAFT_BASE_URL").unwrap_or(defaults.base_url),
            text_model: env::var("SONGCRAFT_TEXT_MODEL").unwrap_or(defaults.text_model),
            image_model: env::var("SONGCRAFT_IMAGE_MODEL").unwrap_or(defaults.image_model),
            speech_model: env::var("SONGCRAFT_SPEECH_MODEL").unwrap_or(defaults.speech_model),
            timeout: env::var("SONGCRAFT_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            features: FeatureFlags {
                image_generation: !env_flag("SONGCRAFT_DISABLE_IMAGE"),
                voice_preview: !env_flag("SONGCRAFT_DISABLE_VOICE"),
            },
        }
    }

    /// Check that the base URL parses as an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::configuration_with_context(
                format!("Unsupported URL scheme: {}", other),
                ErrorContext::new().with_field_path("base_url"),
            )),
        }
    }

    /// The credential, or a configuration error when it was never provided.
    pub(crate) fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::configuration_with_context(
                "API key is not configured",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_details("set GEMINI_API_KEY"),
            )
        })
    }
}

fn env_flag(name: &str) -> bool {
    matches!(
        env::var(name).ok().as_deref().map(str::trim),
        Some("1") | Some("true") | Some("TRUE") | Some("yes")
    )
}
