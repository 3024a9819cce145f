//! Free-text operations: Hiragana reading and lyric drafting.

use tracing::{error, warn};

use super::core::{or_none, AiGatewayClient};
use crate::prompt::requests;

/// Returned by [`AiGatewayClient::convert_to_hiragana`] when conversion fails.
pub const HIRAGANA_ERROR_SENTINEL: &str = "ひらがなへの変換中にエラーが発生しました。";

impl AiGatewayClient {
    /// Rewrite Japanese lyrics in Hiragana, keeping line breaks, section tags
    /// and non-Japanese words.
    ///
    /// Blank input returns `""` without contacting the service. On failure the
    /// result is [`HIRAGANA_ERROR_SENTINEL`].
    pub async fn convert_to_hiragana(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        match self.generate_text(&requests::hiragana(text)).await {
            Ok(converted) => converted,
            Err(e) => {
                error!(operation = "convert_to_hiragana", error = %e, "Hiragana conversion failed");
                HIRAGANA_ERROR_SENTINEL.to_string()
            }
        }
    }

    /// Draft Japanese lyrics with `[Verse]`/`[Chorus]`/`[Bridge]` tags.
    ///
    /// `None` on failure or when the service returns nothing.
    pub async fn generate_lyrics(&self, keywords: &str) -> Option<String> {
        let result = self.generate_text(&requests::lyrics(keywords)).await;
        let lyrics = or_none("generate_lyrics", "Lyrics generation failed", result)?;
        if lyrics.is_empty() {
            warn!(operation = "generate_lyrics", "service returned empty lyrics");
            return None;
        }
        Some(lyrics)
    }
}
