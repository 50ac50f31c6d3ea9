use super::google_translation_repository::extract_provider_error;
use super::speech_repository::SpeechRepository;
use crate::domain::speech::VoiceGender;
use crate::infrastructure::gcp::AccessTokenProvider;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Google Cloud Text-to-Speech v1 implementation of the speech repository
pub struct GoogleSpeechRepository {
    http_client: reqwest::Client,
    base_url: String,
    token_provider: Arc<dyn AccessTokenProvider>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    ssml_gender: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

impl GoogleSpeechRepository {
    pub fn new(base_url: String, token_provider: Arc<dyn AccessTokenProvider>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            token_provider,
        }
    }

    fn synthesize_url(&self) -> String {
        format!("{}/v1/text:synthesize", self.base_url)
    }
}

#[async_trait]
impl SpeechRepository for GoogleSpeechRepository {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, String> {
        let token = self.token_provider.access_token().await?;

        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code,
                ssml_gender: gender.as_str(),
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };

        tracing::info!(
            language_code = language_code,
            gender = gender.as_str(),
            text_length = text.len(),
            "Calling Google Text-to-Speech API"
        );

        let response = self
            .http_client
            .post(self.synthesize_url())
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    language_code = language_code,
                    "Google Text-to-Speech API request failed"
                );
                format!("Google TTS error: {}", e)
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
                "Google Text-to-Speech API returned an error"
            );
            return Err(message);
        }

        let body: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse synthesis response: {}", e))?;

        let audio_bytes = BASE64
            .decode(body.audio_content.as_bytes())
            .map_err(|e| format!("provider returned invalid base64 audio: {}", e))?;

        tracing::debug!(audio_size = audio_bytes.len(), "Audio content received");

        Ok(audio_bytes)
    }
}
