use super::translation_repository::TranslationRepository;
use crate::infrastructure::gcp::AccessTokenProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Google Cloud Translation v3 implementation of the translation repository
pub struct GoogleTranslationRepository {
    http_client: reqwest::Client,
    base_url: String,
    project_id: String,
    token_provider: Arc<dyn AccessTokenProvider>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateTextRequest<'a> {
    contents: Vec<&'a str>,
    mime_type: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateTextResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    #[serde(default)]
    translated_text: String,
}

impl GoogleTranslationRepository {
    pub fn new(
        base_url: String,
        project_id: String,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            project_id,
            token_provider,
        }
    }

    fn translate_url(&self) -> String {
        format!(
            "{}/v3/projects/{}/locations/global:translateText",
            self.base_url, self.project_id
        )
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslationRepository {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, String> {
        let token = self.token_provider.access_token().await?;

        let request = TranslateTextRequest {
            contents: vec![text],
            mime_type: "text/plain",
            // The input side of this system is always English
            source_language_code: "en",
            target_language_code: target_language,
        };

        tracing::info!(
            target_language = target_language,
            text_length = text.len(),
            "Calling Google Translation API"
        );

        let response = self
            .http_client
            .post(self.translate_url())
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    target_language = target_language,
                    "Google Translation API request failed"
                );
                format!("Google Translate error: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = extract_provider_error(
                &response.text().await.unwrap_or_default(),
                status.as_u16(),
            );
            tracing::error!(
                status = status.as_u16(),
                message = %message,
                "Google Translation API returned an error"
            );
            return Err(message);
        }

        let body: TranslateTextResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse translation response: {}", e))?;

        let translated = first_translated_text(body);

        tracing::debug!(
            translated_length = translated.len(),
            "Translation received"
        );

        Ok(translated)
    }
}

/// The contract promises a string even when the provider returns zero
/// translations
fn first_translated_text(response: TranslateTextResponse) -> String {
    response
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .unwrap_or_default()
}

/// Pull the human-readable message out of a Google error body, falling back
/// to the raw body or status code when the shape is unexpected
pub(super) fn extract_provider_error(body: &str, status: u16) -> String {
    #[derive(Deserialize)]
    struct GoogleError {
        error: GoogleErrorBody,
    }
    #[derive(Deserialize)]
    struct GoogleErrorBody {
        message: String,
    }

    match serde_json::from_str::<GoogleError>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => format!("provider returned status {}", status),
    }
}
