use super::error::SpeechServiceError;
use super::voice::VoiceGender;
use crate::infrastructure::repositories::SpeechRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SpeechService {
    speech_repo: Arc<dyn SpeechRepository>,
}

impl SpeechService {
    pub fn new(speech_repo: Arc<dyn SpeechRepository>) -> Self {
        Self { speech_repo }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize speech for the given text and locale.
    ///
    /// One outbound provider call per invocation; no retry. Returns raw MP3
    /// bytes.
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, SpeechServiceError> {
        tracing::info!(
            language_code = language_code,
            gender = %gender,
            text_length = text.len(),
            "Speech synthesis request"
        );

        let audio_data = self
            .speech_repo
            .synthesize(text, language_code, gender)
            .await
            .map_err(SpeechServiceError::Dependency)?;

        tracing::info!(
            audio_size = audio_data.len(),
            language_code = language_code,
            "Speech synthesis completed"
        );

        Ok(audio_data)
    }
}
