//! # songcraft-ai
//!
//! Typed adapters between a songwriting studio and the Gemini
//! `generateContent` API.
//!
//! Each operation builds one prompt, issues one request and reshapes the
//! reply into a value the UI can use directly. Failures never escape: an
//! operation returns `None`, a fixed error string, or does nothing, and the
//! cause is logged through `tracing`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use songcraft_ai::{AiGatewayClient, PromptParams};
//!
//! #[tokio::main]
//! async fn main() -> songcraft_ai::Result<()> {
//!     let client = AiGatewayClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let kana = client.convert_to_hiragana("[Verse]\n夜空に星").await;
//!     println!("{kana}");
//!
//!     let params = PromptParams {
//!         vocal_x: 45.0,
//!         vocal_y: 10.0,
//!         genres: vec!["City Pop".into()],
//!         ..Default::default()
//!     };
//!     println!("{}", client.generate_suno_prompt(&params).await);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`AiGatewayClient`], its builder, operations and chat sessions |
//! | [`prompt`] | Request construction and the vocal pad mappings |
//! | [`structured`] | Response schemas and reply decoding |
//! | [`media`] | PCM decoding, `data:` URLs and audio output |
//! | [`transport`] | HTTP transport to the service |
//! | [`types`] | Wire format and typed results |
//! | [`config`] | Credential, endpoints, models and feature flags |

pub mod client;
pub mod config;
pub mod media;
pub mod prompt;
pub mod structured;
pub mod transport;
pub mod types;

pub use client::{
    AiGatewayClient, AiGatewayClientBuilder, ChatSession, HIRAGANA_ERROR_SENTINEL,
    SUNO_PROMPT_ERROR_SENTINEL,
};
pub use config::{FeatureFlags, GatewayConfig};
pub use media::{AudioBuffer, AudioSink};
pub use types::{
    ArtistAnalysisResult, AudioAnalysisResult, PromptParams, StyleVocabulary, VideoPromptResult,
    VisualPromptResult,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
