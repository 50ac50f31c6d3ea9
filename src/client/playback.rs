use std::io::Write;
use std::path::PathBuf;

/// Destination for synthesized audio. Playback is fire-and-forget: the
/// orchestrator hands the bytes over and does not track completion.
pub trait AudioSink {
    fn play(&self, audio: Vec<u8>) -> Result<(), String>;
}

/// Plays MP3 bytes on the default audio device.
/// Requires the `playback` cargo feature (pulls in rodio/cpal).
#[cfg(feature = "playback")]
pub struct RodioSink {
    // Keeps the device stream alive for detached sinks
    _stream: rodio::OutputStream,
    handle: rodio::OutputStreamHandle,
}

#[cfg(feature = "playback")]
impl RodioSink {
    pub fn try_default() -> Result<Self, String> {
        let (stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| format!("no audio output device: {}", e))?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

#[cfg(feature = "playback")]
impl AudioSink for RodioSink {
    fn play(&self, audio: Vec<u8>) -> Result<(), String> {
        let decoder = rodio::Decoder::new(std::io::Cursor::new(audio))
            .map_err(|e| format!("could not decode audio: {}", e))?;
        let sink = rodio::Sink::try_new(&self.handle)
            .map_err(|e| format!("could not open audio sink: {}", e))?;
        sink.append(decoder);
        // Fire-and-forget: let the sound finish on its own
        sink.detach();
        Ok(())
    }
}

impl AudioSink for Box<dyn AudioSink> {
    fn play(&self, audio: Vec<u8>) -> Result<(), String> {
        (**self).play(audio)
    }
}

/// Writes the audio to a file instead of playing it. Used when the binary
/// is built without the `playback` feature or when the user asks for a
/// file explicitly.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AudioSink for FileSink {
    fn play(&self, audio: Vec<u8>) -> Result<(), String> {
        let mut file = std::fs::File::create(&self.path)
            .map_err(|e| format!("could not create {}: {}", self.path.display(), e))?;
        file.write_all(&audio)
            .map_err(|e| format!("could not write {}: {}", self.path.display(), e))?;
        tracing::info!(path = %self.path.display(), bytes = audio.len(), "Audio written");
        Ok(())
    }
}
