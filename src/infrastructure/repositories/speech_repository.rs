use crate::domain::speech::VoiceGender;
use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider (Google Cloud TTS, AWS Polly, etc.)
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize `text` spoken in the given locale with the given voice
    /// gender.
    ///
    /// Returns raw audio bytes ready for playback (MP3 format).
    ///
    /// # Arguments
    /// * `text` - The text to speak
    /// * `language_code` - Full locale code with region (e.g. "hi-IN")
    /// * `gender` - Voice gender to request from the provider
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unavailable
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, String>;
}
