// Full-loop tests: the client orchestrator driving a real server over HTTP,
// with the Google providers mocked behind it.

use crate::e2e::helpers;

use helpers::{TestContext, TRANSLATE_MOCK_PATH, TTS_MOCK_PATH};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;

use voicebridge::client::{FileSink, HttpSpeechApi, Orchestrator, Status};
use voicebridge::domain::speech::VoiceGender;

const MOCK_AUDIO_B64: &str = "//uQAA==";

fn audio_mock_body() -> String {
    format!(r#"{{"audioContent": "{}"}}"#, MOCK_AUDIO_B64)
}

#[tokio::test]
async fn it_should_skip_translation_for_english() {
    let mut ctx = TestContext::new().await;

    let translate_provider = ctx
        .translate_mock
        .mock("POST", TRANSLATE_MOCK_PATH)
        .expect(0)
        .create_async()
        .await;

    let tts_provider = ctx
        .tts_mock
        .mock("POST", TTS_MOCK_PATH)
        .match_body(Matcher::PartialJson(json!({
            "input": {"text": "Hello"},
            "voice": {"languageCode": "en-US", "ssmlGender": "FEMALE"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(audio_mock_body())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let audio_path = dir.path().join("speech.mp3");

    let mut orchestrator = Orchestrator::new(
        HttpSpeechApi::new(ctx.base_url.clone()),
        FileSink::new(&audio_path),
    );
    orchestrator.set_target_language("en-US");
    orchestrator.set_input_text("Hello");
    orchestrator.submit().await;

    assert_eq!(orchestrator.status(), Status::Success);
    assert_eq!(orchestrator.translated_text(), "Hello");
    assert_eq!(
        std::fs::read(&audio_path).unwrap(),
        vec![0xFF, 0xFB, 0x90, 0x00]
    );

    translate_provider.assert_async().await;
    tts_provider.assert_async().await;
}

#[tokio::test]
async fn it_should_translate_then_speak() {
    let mut ctx = TestContext::new().await;

    let translate_provider = ctx
        .translate_mock
        .mock("POST", TRANSLATE_MOCK_PATH)
        .match_body(Matcher::PartialJson(json!({
            "contents": ["Hello"],
            "targetLanguageCode": "hi"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"translations": [{"translatedText": "नमस्ते"}]}"#)
        .create_async()
        .await;

    // The speech call carries the translation and the full locale
    let tts_provider = ctx
        .tts_mock
        .mock("POST", TTS_MOCK_PATH)
        .match_body(Matcher::PartialJson(json!({
            "input": {"text": "नमस्ते"},
            "voice": {"languageCode": "hi-IN", "ssmlGender": "MALE"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(audio_mock_body())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let audio_path = dir.path().join("speech.mp3");

    let mut orchestrator = Orchestrator::new(
        HttpSpeechApi::new(ctx.base_url.clone()),
        FileSink::new(&audio_path),
    );
    orchestrator.set_target_language("hi-IN");
    orchestrator.set_voice_gender(VoiceGender::Male);
    orchestrator.set_input_text("Hello");
    orchestrator.submit().await;

    assert_eq!(orchestrator.status(), Status::Success);
    assert_eq!(orchestrator.translated_text(), "नमस्ते");
    assert!(audio_path.exists());

    translate_provider.assert_async().await;
    tts_provider.assert_async().await;
}

#[tokio::test]
async fn it_should_report_upstream_failures_inline() {
    let mut ctx = TestContext::new().await;

    ctx.translate_mock
        .mock("POST", TRANSLATE_MOCK_PATH)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();

    let mut orchestrator = Orchestrator::new(
        HttpSpeechApi::new(ctx.base_url.clone()),
        FileSink::new(dir.path().join("speech.mp3")),
    );
    orchestrator.set_target_language("hi-IN");
    orchestrator.set_input_text("Hello");
    orchestrator.submit().await;

    assert_eq!(orchestrator.status(), Status::Failed);
    assert_eq!(
        orchestrator.error(),
        Some("An error occurred: Failed to translate text: quota exceeded")
    );
    assert!(!orchestrator.is_processing());
}
