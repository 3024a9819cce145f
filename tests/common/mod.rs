//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use songcraft_ai::{AiGatewayClient, AiGatewayClientBuilder};

pub const API_KEY: &str = "test-key";
pub const TEXT_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const IMAGE_PATH: &str = "/v1beta/models/gemini-2.5-flash-image:generateContent";
pub const SPEECH_PATH: &str = "/v1beta/models/gemini-2.5-flash-preview-tts:generateContent";

/// Nothing listens here, so every request fails at connect time.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Builder pointed at the mock server, with a credential.
    pub fn builder(&self) -> AiGatewayClientBuilder {
        AiGatewayClient::builder()
            .api_key(API_KEY)
            .base_url_override(&self.base_url)
    }

    pub fn client(&self) -> AiGatewayClient {
        self.builder().build().expect("client builds")
    }

    /// Successful `generateContent` reply with a raw JSON body.
    pub async fn mock_reply(&mut self, path: &str, body: String) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("x-goog-api-key", API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Successful reply, only for requests whose body matches `body_regex`.
    pub async fn mock_reply_matching(&mut self, path: &str, body_regex: &str, body: String) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("x-goog-api-key", API_KEY)
            .match_body(Matcher::Regex(body_regex.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Error reply in the service's error envelope.
    pub async fn mock_error(&mut self, path: &str, status: usize) -> Mock {
        self.server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "error": { "code": status, "message": "simulated failure", "status": "INTERNAL" }
                })
                .to_string(),
            )
            .create_async()
            .await
    }

    /// A mock that must never be hit.
    pub async fn mock_never_called(&mut self, path: &str) -> Mock {
        self.server
            .mock("POST", path)
            .with_status(200)
            .with_body(text_reply("unexpected"))
            .expect(0)
            .create_async()
            .await
    }
}

/// Client whose requests fail with a connection error.
pub fn unreachable_client() -> AiGatewayClient {
    AiGatewayClient::builder()
        .api_key(API_KEY)
        .base_url_override(UNREACHABLE_URL)
        .build()
        .expect("client builds")
}

pub fn text_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

pub fn inline_reply(mime_type: &str, data: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "inlineData": { "mimeType": mime_type, "data": data } }]
            },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
