pub mod error;
pub mod service;
pub mod voice;

pub use error::SpeechServiceError;
pub use service::{SpeechService, SpeechServiceApi};
pub use voice::VoiceGender;
