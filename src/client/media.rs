//! Image generation and spoken voice previews.

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::core::{or_none, AiGatewayClient};
use crate::media::{decode_speech, to_data_uri};
use crate::prompt::{requests, Voice};
use crate::{Error, ErrorContext, Result};

impl AiGatewayClient {
    /// Generate an image and return it as a `data:` URI.
    ///
    /// `None` when the reply has no image part, on failure, or when image
    /// generation is disabled in [`FeatureFlags`](crate::config::FeatureFlags).
    pub async fn generate_image(&self, prompt: &str) -> Option<String> {
        if !self.config.features.image_generation {
            debug!(operation = "generate_image", "image generation is disabled");
            return None;
        }
        let result = self.try_generate_image(prompt).await;
        or_none("generate_image", "Image generation failed", result)
    }

    async fn try_generate_image(&self, prompt: &str) -> Result<String> {
        let response = self
            .generate(&self.config.image_model, &requests::image(prompt))
            .await?;
        let image = response.inline_data("image/").ok_or_else(|| {
            Error::decode_with_context(
                "reply contains no image part",
                ErrorContext::new()
                    .with_field_path("candidates[0].content.parts")
                    .with_source("generate_image"),
            )
        })?;
        Ok(to_data_uri(&image.mime_type, &image.data))
    }

    /// Speak `text` with a voice chosen from `vocal_x` and play it.
    ///
    /// Nothing is played when the reply carries no audio. Failures are logged
    /// and never returned. `vocal_y` does not influence the voice.
    pub async fn play_voice_sample(&self, text: &str, vocal_x: f64, _vocal_y: f64) {
        if !self.config.features.voice_preview {
            debug!(operation = "play_voice_sample", "voice preview is disabled");
            return;
        }
        if let Err(e) = self.try_play_voice_sample(text, vocal_x).await {
            error!(operation = "play_voice_sample", error = %e, "Voice sample playback failed");
        }
    }

    async fn try_play_voice_sample(&self, text: &str, vocal_x: f64) -> Result<()> {
        let voice = Voice::for_vocal_x(vocal_x);
        let response = self
            .generate(&self.config.speech_model, &requests::speech(text, voice))
            .await?;

        let payload = response
            .parts()
            .iter()
            .filter_map(|p| p.inline_data.as_ref())
            .map(|d| d.data.as_str())
            .find(|data| !data.is_empty());
        let Some(payload) = payload else {
            warn!(operation = "play_voice_sample", %voice, "reply carries no audio payload");
            return Ok(());
        };

        let buffer = decode_speech(payload)?;
        debug!(
            %voice,
            frames = buffer.frames(),
            seconds = buffer.duration_secs(),
            "playing voice sample"
        );

        let sink = Arc::clone(&self.sink);
        tokio::task::spawn_blocking(move || sink.play(buffer))
            .await
            .map_err(|e| Error::Playback(e.to_string()))?
    }
}
