use super::api::SpeechApi;
use super::language::{base_code, ENGLISH_US};
use super::playback::AudioSink;
use crate::domain::speech::VoiceGender;

/// Workflow state. Success and Failed persist until the next submit so the
/// result (or the error line) stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Processing,
    Success,
    Failed,
}

/// Sequences the translate-then-synthesize workflow and owns all client
/// state. Single owner, mutated only through `&mut self`; the two network
/// calls are strictly sequential because the second depends on the first's
/// output.
///
/// There is no cancellation and no stale-response guard: overlapping
/// submissions are prevented by the `can_submit` interlock alone.
pub struct Orchestrator<A: SpeechApi, S: AudioSink> {
    api: A,
    sink: S,
    input_text: String,
    target_language: String,
    voice_gender: VoiceGender,
    translated_text: String,
    error: Option<String>,
    status: Status,
}

impl<A: SpeechApi, S: AudioSink> Orchestrator<A, S> {
    pub fn new(api: A, sink: S) -> Self {
        Self {
            api,
            sink,
            input_text: String::new(),
            // Defaults mirror the product UI
            target_language: "hi-IN".to_string(),
            voice_gender: VoiceGender::Female,
            translated_text: String::new(),
            error: None,
            status: Status::Idle,
        }
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn set_target_language(&mut self, locale: impl Into<String>) {
        self.target_language = locale.into();
    }

    pub fn set_voice_gender(&mut self, gender: VoiceGender) {
        self.voice_gender = gender;
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_processing(&self) -> bool {
        self.status == Status::Processing
    }

    /// Submission is refused for blank input and while a request is in
    /// flight. This interlock is the only double-submit protection.
    pub fn can_submit(&self) -> bool {
        !self.is_processing() && !self.input_text.trim().is_empty()
    }

    /// Run the full translate-then-speak workflow once.
    ///
    /// The processing state is released on every exit path; a failed step
    /// sets the error line and aborts the remaining steps.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }

        // Clear prior error and translation before starting
        self.error = None;
        self.translated_text.clear();
        self.status = Status::Processing;

        let result = self.run_workflow().await;

        self.status = match result {
            Ok(()) => Status::Success,
            Err(message) => {
                self.error = Some(format!("An error occurred: {}", message));
                Status::Failed
            }
        };
    }

    async fn run_workflow(&mut self) -> Result<(), String> {
        let text_to_speak = if self.target_language == ENGLISH_US {
            // Deliberate short-circuit: English input needs no translation,
            // and the input is displayed unchanged as the result
            self.translated_text = self.input_text.clone();
            self.input_text.clone()
        } else {
            let translated = self
                .api
                .translate(&self.input_text, base_code(&self.target_language))
                .await
                .map_err(|e| e.to_string())?;
            self.translated_text = translated.clone();
            translated
        };

        // The speech call gets the full locale, region included
        let audio = self
            .api
            .synthesize(&text_to_speak, &self.target_language, self.voice_gender)
            .await
            .map_err(|e| e.to_string())?;

        self.sink.play(audio)
    }
}
