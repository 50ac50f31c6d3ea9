//! Client side of VoiceBridge: the request orchestrator that sequences
//! translate-then-synthesize against a running server, plus the HTTP api
//! client and audio sinks it drives.

pub mod api;
pub mod language;
pub mod orchestrator;
pub mod playback;

pub use api::{ApiError, HttpSpeechApi, SpeechApi};
pub use language::{base_code, find_language, Language, ENGLISH_US, SUPPORTED_LANGUAGES};
pub use orchestrator::{Orchestrator, Status};
pub use playback::{AudioSink, FileSink};

#[cfg(feature = "playback")]
pub use playback::RodioSink;
