use async_trait::async_trait;

/// Repository for text translation.
/// Abstracts the underlying translation provider (Google Cloud Translation,
/// DeepL, etc.)
///
/// Implementations are responsible for:
/// - Provider-specific request shaping and authentication
/// - Mapping the provider response down to the translated text
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` into the given ISO 639-1 target language.
    ///
    /// The source language is fixed to English by the providers we wrap.
    /// Returns the first translation's text, or an empty string when the
    /// provider returns no translations.
    ///
    /// # Errors
    /// Returns error if the provider call fails or the response cannot be
    /// parsed
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, String>;
}
