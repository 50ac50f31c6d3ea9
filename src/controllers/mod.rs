pub mod health;
pub mod translate;
pub mod tts;

pub use translate::TranslateController;
pub use tts::TtsController;
