use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::translation::{TranslationService, TranslationServiceApi},
    error::{AppError, AppResult},
};

/// 400 message fixed by the endpoint contract
pub const MISSING_TRANSLATE_FIELDS: &str = "Missing \"text\" or \"targetLanguage\"";

/// Request for POST /api/translate.
/// Fields are optional at the serde level so a missing field answers 400
/// with the contract message instead of a framework rejection.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate English text to a target language
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        // Validate input before touching the provider
        let text = required_field(request.text.as_deref())
            .ok_or_else(|| AppError::BadRequest(MISSING_TRANSLATE_FIELDS.to_string()))?;
        let target_language = required_field(request.target_language.as_deref())
            .ok_or_else(|| AppError::BadRequest(MISSING_TRANSLATE_FIELDS.to_string()))?;

        let translated_text = controller
            .translation_service
            .translate(text, target_language)
            .await
            .map_err(AppError::from)?;

        Ok(Json(TranslateResponse { translated_text }))
    }
}

/// Treat absent and empty values alike, per the endpoint contract.
/// Whitespace-only values are valid input and go to the provider as-is;
/// only the client-side submit interlock is blank-aware.
pub(super) fn required_field(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
