//! Typed inputs and results exchanged with the songwriting UI.

use serde::{Deserialize, Serialize};

/// Inputs for the Suno-style prompt generator.
///
/// Vocal coordinates live on a -100..100 pad: X runs male → female,
/// Y runs low → high pitch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptParams {
    pub vocal_x: f64,
    pub vocal_y: f64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

/// Closed label sets the artist analysis must choose from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleVocabulary {
    pub genres: Vec<String>,
    pub textures: Vec<String>,
    pub instruments: Vec<String>,
}

impl StyleVocabulary {
    pub fn new(
        genres: impl IntoIterator<Item = impl Into<String>>,
        textures: impl IntoIterator<Item = impl Into<String>>,
        instruments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            textures: textures.into_iter().map(Into::into).collect(),
            instruments: instruments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistAnalysisResult {
    pub vocal_x: f64,
    pub vocal_y: f64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub instruments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAnalysisResult {
    pub vocal_x: f64,
    pub vocal_y: f64,
    #[serde(default)]
    pub textures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualPromptResult {
    /// Short caption for the UI (about 30 characters, not enforced).
    pub scene_description: String,
    pub image_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPromptResult {
    pub scene_description: String,
    pub sora_prompt: String,
    /// The lyric section the prompt was built from, copied from the request.
    pub lyrics_part: String,
}

/// What the service returns for a video prompt; the lyric section is not echoed back.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoPromptReply {
    pub scene_description: String,
    pub sora_prompt: String,
}

impl VideoPromptReply {
    pub(crate) fn with_lyrics(self, lyrics_part: impl Into<String>) -> VideoPromptResult {
        VideoPromptResult {
            scene_description: self.scene_description,
            sora_prompt: self.sora_prompt,
            lyrics_part: lyrics_part.into(),
        }
    }
}
