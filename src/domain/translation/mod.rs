pub mod error;
pub mod service;

pub use error::TranslationServiceError;
pub use service::{TranslationService, TranslationServiceApi};
