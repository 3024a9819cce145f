//! Prompt construction: instructions, structured constraints and the vocal
//! pad mappings that are resolved locally before a request is sent.

pub mod builder;
pub mod requests;
pub mod vocal;

pub use builder::PromptBuilder;
pub use requests::{PRODUCER_PERSONA, SUNO_PROMPT_MAX_CHARS};
pub use vocal::{vocal_descriptor, Voice};
