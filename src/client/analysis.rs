//! Structured analyses: artist style, recorded vocals, visual and video prompts.

use super::core::{or_none, AiGatewayClient};
use crate::media::{data_url_mime_type, strip_data_url_prefix};
use crate::prompt::requests;
use crate::types::results::VideoPromptReply;
use crate::types::{
    ArtistAnalysisResult, AudioAnalysisResult, StyleVocabulary, VideoPromptResult,
    VisualPromptResult,
};
use crate::{Error, ErrorContext, Result};

impl AiGatewayClient {
    /// Place an artist on the vocal pad and pick matching labels from `vocabulary`.
    pub async fn analyze_artist_style(
        &self,
        artist_name: &str,
        vocabulary: &StyleVocabulary,
    ) -> Option<ArtistAnalysisResult> {
        let request = requests::artist_style(artist_name, vocabulary);
        let result = self.generate_json(&request).await;
        or_none("analyze_artist_style", "Artist style analysis failed", result)
    }

    /// Characterize a recorded vocal. `base64_audio` may be a full `data:` URL.
    pub async fn analyze_vocal_audio(
        &self,
        base64_audio: &str,
        mime_type: &str,
    ) -> Option<AudioAnalysisResult> {
        let result = self.try_analyze_vocal_audio(base64_audio, mime_type).await;
        or_none("analyze_vocal_audio", "Vocal audio analysis failed", result)
    }

    async fn try_analyze_vocal_audio(
        &self,
        base64_audio: &str,
        mime_type: &str,
    ) -> Result<AudioAnalysisResult> {
        let payload = strip_data_url_prefix(base64_audio);
        if payload.is_empty() {
            return Err(Error::validation_with_context(
                "audio payload is empty",
                ErrorContext::new().with_field_path("base64_audio"),
            ));
        }
        let mime_type = match mime_type.trim() {
            "" => data_url_mime_type(base64_audio).unwrap_or("audio/webm"),
            declared => declared,
        };
        self.generate_json(&requests::vocal_audio(payload, mime_type))
            .await
    }

    /// Scene caption plus an image-generation prompt for a whole lyric.
    pub async fn generate_visual_prompts(&self, lyrics: &str) -> Option<VisualPromptResult> {
        let result = self.generate_json(&requests::visual_prompts(lyrics)).await;
        or_none("generate_visual_prompts", "Visual prompt generation failed", result)
    }

    /// Scene caption plus a text-to-video prompt for one lyric section.
    ///
    /// The returned `lyrics_part` is always the input section.
    pub async fn generate_video_prompt_for_section(
        &self,
        lyrics_part: &str,
    ) -> Option<VideoPromptResult> {
        let result = self
            .generate_json::<VideoPromptReply>(&requests::video_prompt(lyrics_part))
            .await
            .map(|reply| reply.with_lyrics(lyrics_part));
        or_none(
            "generate_video_prompt_for_section",
            "Video prompt generation failed",
            result,
        )
    }
}
