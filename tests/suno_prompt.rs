//! Integration tests for the Suno style prompt generator

mod common;

use common::{text_reply, unreachable_client, MockServerFixture, TEXT_PATH};
use songcraft_ai::{PromptParams, SUNO_PROMPT_ERROR_SENTINEL};

fn params() -> PromptParams {
    PromptParams {
        vocal_x: 31.0,
        vocal_y: 31.0,
        genres: vec!["City Pop".into()],
        textures: vec!["Breathy".into()],
        instruments: vec!["Slap Bass".into(), "Rhodes".into()],
        artist: Some("Someone Famous".into()),
    }
}

#[tokio::test]
async fn test_output_never_exceeds_limit() {
    for len in [999usize, 1000, 1001, 1500, 5000] {
        let mut fixture = MockServerFixture::new().await;
        let reply = "a".repeat(len);
        let _mock = fixture.mock_reply(TEXT_PATH, text_reply(&reply)).await;
        let client = fixture.client();

        let prompt = client.generate_suno_prompt(&params()).await;
        assert!(prompt.chars().count() <= 1000, "reply length {}", len);
        assert_eq!(prompt.chars().count(), len.min(1000));
    }
}

#[tokio::test]
async fn test_truncation_counts_characters() {
    let mut fixture = MockServerFixture::new().await;
    let reply = "音".repeat(1200);
    let _mock = fixture.mock_reply(TEXT_PATH, text_reply(&reply)).await;
    let client = fixture.client();

    let prompt = client.generate_suno_prompt(&params()).await;
    assert_eq!(prompt.chars().count(), 1000);
    assert!(prompt.chars().all(|c| c == '音'));
}

#[tokio::test]
async fn test_reply_is_trimmed_before_truncation() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_reply(TEXT_PATH, text_reply("\n  city pop, female vocals, slap bass  \n"))
        .await;
    let client = fixture.client();

    assert_eq!(
        client.generate_suno_prompt(&params()).await,
        "city pop, female vocals, slap bass"
    );
}

#[tokio::test]
async fn test_request_embeds_vocal_descriptor() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_reply_matching(
            TEXT_PATH,
            r"Vocals: Female vocals, High pitch",
            text_reply("female vocals"),
        )
        .await;
    let client = fixture.client();

    assert_eq!(client.generate_suno_prompt(&params()).await, "female vocals");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failures_return_japanese_sentinel() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error(TEXT_PATH, 500).await;
    assert_eq!(
        fixture.client().generate_suno_prompt(&params()).await,
        SUNO_PROMPT_ERROR_SENTINEL
    );

    assert_eq!(
        unreachable_client().generate_suno_prompt(&params()).await,
        SUNO_PROMPT_ERROR_SENTINEL
    );
}
