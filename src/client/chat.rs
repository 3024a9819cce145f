//! Multi-turn producer chat.

use tracing::{debug, error};

use super::core::{or_none, AiGatewayClient};
use crate::prompt::PRODUCER_PERSONA;
use crate::structured::response_text;
use crate::types::{Content, GenerateContentRequest};
use crate::Result;

/// Conversation with the producer persona.
///
/// The service keeps no state between calls, so the session carries the
/// transcript and sends it with every turn. A failed turn leaves the
/// transcript untouched.
#[derive(Debug, Clone)]
pub struct ChatSession {
    client: AiGatewayClient,
    model: String,
    system_instruction: Content,
    history: Vec<Content>,
}

impl AiGatewayClient {
    /// Open a chat bound to the producer persona. `None` if the client cannot
    /// reach the service (e.g. no credential).
    pub fn create_chat_session(&self) -> Option<ChatSession> {
        let result = self.transport().map(|_| ChatSession {
            client: self.clone(),
            model: self.config.text_model.clone(),
            system_instruction: Content::system(PRODUCER_PERSONA),
            history: Vec::new(),
        });
        or_none("create_chat_session", "Chat session creation failed", result)
    }
}

impl ChatSession {
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub fn persona(&self) -> Option<String> {
        self.system_instruction.text()
    }

    /// Send one user message and return the reply. `None` on failure.
    pub async fn send_message(&mut self, message: &str) -> Option<String> {
        match self.try_send(message).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!(operation = "send_message", error = %e, "Chat message failed");
                None
            }
        }
    }

    async fn try_send(&mut self, message: &str) -> Result<String> {
        let user_turn = Content::user(message);
        let mut contents = self.history.clone();
        contents.push(user_turn.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(self.system_instruction.clone()),
            generation_config: None,
        };
        let response = self.client.generate(&self.model, &request).await?;
        let reply = response_text(&response)?;

        self.history.push(user_turn);
        self.history.push(Content::model(reply.clone()));
        debug!(turns = self.history.len() / 2, "chat turn completed");
        Ok(reply)
    }
}
