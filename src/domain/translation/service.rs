use super::error::TranslationServiceError;
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(translation_repo: Arc<dyn TranslationRepository>) -> Self {
        Self { translation_repo }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate English text into the given ISO 639-1 target language.
    ///
    /// One outbound provider call per invocation; no retry. An empty result
    /// from the provider is returned as an empty string, not an error.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationServiceError> {
        tracing::info!(
            target_language = target_language,
            text_length = text.len(),
            "Translation request"
        );

        let translated = self
            .translation_repo
            .translate(text, target_language)
            .await
            .map_err(TranslationServiceError::Dependency)?;

        tracing::info!(
            target_language = target_language,
            translated_length = translated.len(),
            "Translation completed"
        );

        Ok(translated)
    }
}
