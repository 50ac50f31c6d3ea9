use crate::e2e::helpers;

use helpers::{TestContext, TTS_MOCK_PATH};
use hyper::StatusCode;
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;

const MISSING_FIELDS: &str = "Missing \"text\", \"languageCode\" or \"gender\"";

// //uQAA== is a minimal MP3 frame header, base64-encoded
const MOCK_AUDIO_B64: &str = "//uQAA==";

#[tokio::test]
async fn it_should_reject_missing_fields() {
    let ctx = TestContext::new().await;

    let bodies = [
        json!({"languageCode": "hi-IN", "gender": "FEMALE"}),
        json!({"text": "Hello", "gender": "FEMALE"}),
        json!({"text": "Hello", "languageCode": "hi-IN"}),
        json!({"text": "", "languageCode": "hi-IN", "gender": "FEMALE"}),
    ];

    for body in &bodies {
        let response = ctx.client.post("/api/tts", body).await.unwrap();
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.error_message(), Some(MISSING_FIELDS));
    }
}

#[tokio::test]
async fn it_should_reject_unknown_gender() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .post(
            "/api/tts",
            &json!({"text": "Hello", "languageCode": "hi-IN", "gender": "ROBOT"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.error_message().unwrap();
    assert!(message.contains("FEMALE or MALE"), "got: {}", message);
}

#[tokio::test]
async fn it_should_synthesize_speech() {
    let mut ctx = TestContext::new().await;

    let provider = ctx
        .tts_mock
        .mock("POST", TTS_MOCK_PATH)
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(json!({
            "input": {"text": "नमस्ते"},
            "voice": {"languageCode": "hi-IN", "ssmlGender": "FEMALE"},
            "audioConfig": {"audioEncoding": "MP3"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"audioContent": "{}"}}"#, MOCK_AUDIO_B64))
        .create_async()
        .await;

    let response = ctx
        .client
        .post(
            "/api/tts",
            &json!({"text": "नमस्ते", "languageCode": "hi-IN", "gender": "FEMALE"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("audioContent").and_then(|v| v.as_str()),
        Some(MOCK_AUDIO_B64)
    );
    provider.assert_async().await;
}

#[tokio::test]
async fn it_should_accept_male_voice() {
    let mut ctx = TestContext::new().await;

    let provider = ctx
        .tts_mock
        .mock("POST", TTS_MOCK_PATH)
        .match_body(Matcher::PartialJson(json!({
            "voice": {"languageCode": "en-US", "ssmlGender": "MALE"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"audioContent": "{}"}}"#, MOCK_AUDIO_B64))
        .create_async()
        .await;

    let response = ctx
        .client
        .post(
            "/api/tts",
            &json!({"text": "Hello", "languageCode": "en-US", "gender": "MALE"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    provider.assert_async().await;
}

#[tokio::test]
async fn it_should_surface_provider_errors_as_500() {
    let mut ctx = TestContext::new().await;

    ctx.tts_mock
        .mock("POST", TTS_MOCK_PATH)
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"code": 403, "message": "permission denied", "status": "PERMISSION_DENIED"}}"#)
        .create_async()
        .await;

    let response = ctx
        .client
        .post(
            "/api/tts",
            &json!({"text": "Hello", "languageCode": "hi-IN", "gender": "FEMALE"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.error_message(),
        Some("Failed to synthesize speech: permission denied")
    );
}
