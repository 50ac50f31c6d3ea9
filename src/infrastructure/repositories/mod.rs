pub mod google_speech_repository;
pub mod google_translation_repository;
pub mod speech_repository;
pub mod translation_repository;

pub use google_speech_repository::GoogleSpeechRepository;
pub use google_translation_repository::GoogleTranslationRepository;
pub use speech_repository::SpeechRepository;
pub use translation_repository::TranslationRepository;
