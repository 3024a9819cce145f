//! Integration tests for the producer chat session

mod common;

use common::{text_reply, MockServerFixture, TEXT_PATH};
use songcraft_ai::AiGatewayClient;

#[tokio::test]
async fn test_session_requires_credential() {
    let client = AiGatewayClient::builder().build().unwrap();
    assert!(client.create_chat_session().is_none());
}

#[tokio::test]
async fn test_session_has_producer_persona() {
    let fixture = MockServerFixture::new().await;
    let session = fixture.client().create_chat_session().unwrap();

    let persona = session.persona().unwrap();
    assert!(persona.contains("music producer"));
    assert!(persona.contains("Japanese"));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_history_is_resent_each_turn() {
    let mut fixture = MockServerFixture::new().await;
    let first = fixture
        .mock_reply_matching(
            TEXT_PATH,
            r#"^\{"contents":\[\{"role":"user","parts":\[\{"text":"hello"\}\]\}\],"systemInstruction""#,
            text_reply("first reply"),
        )
        .await;
    let second = fixture
        .mock_reply_matching(
            TEXT_PATH,
            r#""role":"model","parts":\[\{"text":"first reply"\}\]\},\{"role":"user","parts":\[\{"text":"second"\}\]\}\]"#,
            text_reply("second reply"),
        )
        .await;
    let mut session = fixture.client().create_chat_session().unwrap();

    assert_eq!(session.send_message("hello").await.as_deref(), Some("first reply"));
    assert_eq!(session.send_message("second").await.as_deref(), Some("second reply"));

    first.assert_async().await;
    second.assert_async().await;

    let roles: Vec<_> = session
        .history()
        .iter()
        .map(|c| c.role.clone().unwrap_or_default())
        .collect();
    assert_eq!(roles, vec!["user", "model", "user", "model"]);
}

#[tokio::test]
async fn test_failed_turn_leaves_history_untouched() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error(TEXT_PATH, 500).await;
    let mut session = fixture.client().create_chat_session().unwrap();

    assert!(session.send_message("hello").await.is_none());
    assert!(session.history().is_empty());
}
