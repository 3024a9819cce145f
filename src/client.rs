//! The gateway client and its operations.
//!
//! Every public operation is a failure boundary: errors are logged with an
//! operation-specific message and turned into that operation's sentinel
//! (`None`, a fixed error string, or a no-op).

pub mod analysis;
pub mod builder;
pub mod chat;
pub mod core;
pub mod media;
pub mod suno;
pub mod text;

pub use builder::AiGatewayClientBuilder;
pub use chat::ChatSession;
pub use self::core::AiGatewayClient;
pub use suno::SUNO_PROMPT_ERROR_SENTINEL;
pub use text::HIRAGANA_ERROR_SENTINEL;
