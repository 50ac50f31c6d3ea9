use crate::controllers::translate::{TranslateRequest, TranslateResponse};
use crate::controllers::tts::{TtsRequest, TtsResponse};
use crate::domain::speech::VoiceGender;
use crate::error::ErrorResponse;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Error raised by a proxy endpoint call. The display form is what the
/// orchestrator shows the user after the "An error occurred: " prefix.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The endpoint answered with a non-success status and an error body
    #[error("{0}")]
    Api(String),
    /// The request itself failed (network, decode)
    #[error("{0}")]
    Transport(String),
}

/// The two proxy endpoints as seen by the orchestrator
#[async_trait]
pub trait SpeechApi: Send + Sync {
    /// POST /api/translate with a base language code ("hi", not "hi-IN")
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ApiError>;

    /// POST /api/tts with the full locale code; returns decoded audio bytes
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, ApiError>;
}

/// reqwest-backed client for a running VoiceBridge server
pub struct HttpSpeechApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpSpeechApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Turn a non-success response into the error message the server sent,
    /// with a per-endpoint fallback when the body is not the expected shape
    async fn error_message(response: reqwest::Response, fallback: &str) -> ApiError {
        match response.json::<ErrorResponse>().await {
            Ok(body) => ApiError::Api(body.error),
            Err(_) => ApiError::Api(fallback.to_string()),
        }
    }
}

#[async_trait]
impl SpeechApi for HttpSpeechApi {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ApiError> {
        let request = TranslateRequest {
            text: Some(text.to_string()),
            target_language: Some(target_language.to_string()),
        };

        let response = self
            .http_client
            .post(format!("{}/api/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_message(response, "Translation failed.").await);
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(body.translated_text)
    }

    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, ApiError> {
        let request = TtsRequest {
            text: Some(text.to_string()),
            language_code: Some(language_code.to_string()),
            gender: Some(gender.as_str().to_string()),
        };

        let response = self
            .http_client
            .post(format!("{}/api/tts", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_message(response, "Speech generation failed.").await);
        }

        let body: TtsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        BASE64
            .decode(body.audio_content.as_bytes())
            .map_err(|e| ApiError::Transport(format!("invalid audio content: {}", e)))
    }
}
