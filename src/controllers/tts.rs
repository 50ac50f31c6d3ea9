use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::translate::required_field;
use crate::{
    domain::speech::{SpeechService, SpeechServiceApi, VoiceGender},
    error::{AppError, AppResult},
};

/// 400 message for absent/blank fields, symmetric to the translate endpoint
pub const MISSING_TTS_FIELDS: &str = "Missing \"text\", \"languageCode\" or \"gender\"";

/// Request for POST /api/tts
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsResponse {
    /// Base64-encoded MP3 bytes
    pub audio_content: String,
}

pub struct TtsController {
    speech_service: Arc<SpeechService>,
}

impl TtsController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/tts - Synthesize speech for a text in a given locale
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<Json<TtsResponse>> {
        // Validate input before touching the provider
        let text = required_field(request.text.as_deref())
            .ok_or_else(|| AppError::BadRequest(MISSING_TTS_FIELDS.to_string()))?;
        let language_code = required_field(request.language_code.as_deref())
            .ok_or_else(|| AppError::BadRequest(MISSING_TTS_FIELDS.to_string()))?;
        let gender = required_field(request.gender.as_deref())
            .ok_or_else(|| AppError::BadRequest(MISSING_TTS_FIELDS.to_string()))?
            .parse::<VoiceGender>()
            .map_err(AppError::BadRequest)?;

        let audio_data = controller
            .speech_service
            .synthesize(text, language_code, gender)
            .await
            .map_err(AppError::from)?;

        Ok(Json(TtsResponse {
            audio_content: BASE64.encode(audio_data),
        }))
    }
}
