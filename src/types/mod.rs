//! Core data types.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`message`] | Gemini `generateContent` request/response wire format |
//! | [`results`] | Prompt inputs and typed analysis results for the UI |

pub mod message;
pub mod results;

pub use message::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, SpeechConfig,
};
pub use results::{
    ArtistAnalysisResult, AudioAnalysisResult, PromptParams, StyleVocabulary, VideoPromptResult,
    VisualPromptResult,
};
