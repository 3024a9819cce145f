use tracing::{debug, error};

use super::core::AiGatewayClient;
use crate::prompt::requests::{self, SUNO_PROMPT_MAX_CHARS};
use crate::structured::truncate_chars;
use crate::types::PromptParams;

/// Returned by [`AiGatewayClient::generate_suno_prompt`] when generation fails.
pub const SUNO_PROMPT_ERROR_SENTINEL: &str = "プロンプトの生成中にエラーが発生しました。";

impl AiGatewayClient {
    /// Build a comma-separated Suno style prompt.
    ///
    /// The result never exceeds [`SUNO_PROMPT_MAX_CHARS`] characters, whatever
    /// the service returns. On failure the result is
    /// [`SUNO_PROMPT_ERROR_SENTINEL`].
    pub async fn generate_suno_prompt(&self, params: &PromptParams) -> String {
        match self.generate_text(&requests::suno_prompt(params)).await {
            Ok(prompt) => {
                let count = prompt.chars().count();
                if count > SUNO_PROMPT_MAX_CHARS {
                    debug!(
                        operation = "generate_suno_prompt",
                        chars = count,
                        "truncating over-long style prompt"
                    );
                }
                truncate_chars(&prompt, SUNO_PROMPT_MAX_CHARS)
            }
            Err(e) => {
                error!(operation = "generate_suno_prompt", error = %e, "Suno prompt generation failed");
                SUNO_PROMPT_ERROR_SENTINEL.to_string()
            }
        }
    }
}
