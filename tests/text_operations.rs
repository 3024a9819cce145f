//! Integration tests for Hiragana conversion and lyric drafting

mod common;

use common::{text_reply, unreachable_client, MockServerFixture, TEXT_PATH};
use songcraft_ai::{AiGatewayClient, HIRAGANA_ERROR_SENTINEL};

#[tokio::test]
async fn test_hiragana_blank_input_skips_service() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never_called(TEXT_PATH).await;
    let client = fixture.client();

    assert_eq!(client.convert_to_hiragana("").await, "");
    assert_eq!(client.convert_to_hiragana("   ").await, "");
    assert_eq!(client.convert_to_hiragana("\n\t").await, "");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_hiragana_returns_trimmed_reply() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_reply_matching(
            TEXT_PATH,
            r"夜空に星",
            text_reply("\n[Verse]\nよぞらにほし\n  "),
        )
        .await;
    let client = fixture.client();

    let kana = client.convert_to_hiragana("[Verse]\n夜空に星").await;
    assert_eq!(kana, "[Verse]\nよぞらにほし");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_hiragana_server_error_returns_sentinel() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error(TEXT_PATH, 500).await;
    let client = fixture.client();

    assert_eq!(client.convert_to_hiragana("夜空").await, HIRAGANA_ERROR_SENTINEL);
}

#[tokio::test]
async fn test_hiragana_network_failure_returns_sentinel() {
    let client = unreachable_client();
    assert_eq!(client.convert_to_hiragana("夜空").await, HIRAGANA_ERROR_SENTINEL);
}

#[tokio::test]
async fn test_lyrics_success() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_reply(TEXT_PATH, text_reply("  [Verse]\n夏の終わり\n[Chorus]\n君と  "))
        .await;
    let client = fixture.client();

    let lyrics = client.generate_lyrics("夏, 海").await;
    assert_eq!(lyrics.as_deref(), Some("[Verse]\n夏の終わり\n[Chorus]\n君と"));
}

#[tokio::test]
async fn test_lyrics_empty_reply_is_none() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_reply(TEXT_PATH, text_reply("   \n")).await;
    let client = fixture.client();

    assert_eq!(client.generate_lyrics("夏").await, None);
}

#[tokio::test]
async fn test_lyrics_failures_are_none() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error(TEXT_PATH, 503).await;
    assert_eq!(fixture.client().generate_lyrics("夏").await, None);

    assert_eq!(unreachable_client().generate_lyrics("夏").await, None);
}

#[tokio::test]
async fn test_missing_api_key_degrades_without_requests() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never_called(TEXT_PATH).await;
    let client = AiGatewayClient::builder()
        .base_url_override(&fixture.base_url)
        .build()
        .unwrap();

    assert_eq!(client.convert_to_hiragana("夜空").await, HIRAGANA_ERROR_SENTINEL);
    assert_eq!(client.generate_lyrics("夏").await, None);
    mock.assert_async().await;
}
