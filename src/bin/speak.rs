use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use voicebridge::client::{
    find_language, AudioSink, FileSink, HttpSpeechApi, Orchestrator, Status, SUPPORTED_LANGUAGES,
};
use voicebridge::domain::speech::VoiceGender;

/// Translate text and speak it through a VoiceBridge server
#[derive(Debug, Parser)]
#[command(name = "voicebridge-speak")]
struct Args {
    /// VoiceBridge server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,

    /// Target locale code (e.g. hi-IN, en-US)
    #[arg(long, default_value = "hi-IN")]
    language: String,

    /// Voice gender: FEMALE or MALE
    #[arg(long, default_value = "FEMALE")]
    gender: String,

    /// Write the audio to this file instead of playing it
    #[arg(long)]
    output: Option<PathBuf>,

    /// Text to speak; reads lines from stdin when omitted
    text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voicebridge=info".into()),
        )
        .init();

    let args = Args::parse();

    if find_language(&args.language).is_none() {
        let supported: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect();
        bail!(
            "unsupported language \"{}\"; supported: {}",
            args.language,
            supported.join(", ")
        );
    }

    let gender: VoiceGender = args
        .gender
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let sink = make_sink(args.output.as_deref())?;
    let api = HttpSpeechApi::new(args.server.clone());

    let mut orchestrator = Orchestrator::new(api, sink);
    orchestrator.set_target_language(args.language.clone());
    orchestrator.set_voice_gender(gender);

    match args.text {
        Some(text) => speak_once(&mut orchestrator, &text).await,
        None => {
            // Interactive: one line, one translate-and-speak round
            let stdin = std::io::stdin();
            loop {
                print!("> ");
                std::io::stdout().flush().context("flush stdout")?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                speak_once(&mut orchestrator, line.trim()).await;
            }
        }
    }

    Ok(())
}

async fn speak_once<A, S>(orchestrator: &mut Orchestrator<A, S>, text: &str)
where
    A: voicebridge::client::SpeechApi,
    S: AudioSink,
{
    orchestrator.set_input_text(text);
    orchestrator.submit().await;

    match orchestrator.status() {
        Status::Success => println!("{}", orchestrator.translated_text()),
        Status::Failed => {
            if let Some(error) = orchestrator.error() {
                eprintln!("{}", error);
            }
        }
        Status::Idle | Status::Processing => {}
    }
}

#[cfg(feature = "playback")]
fn make_sink(output: Option<&std::path::Path>) -> Result<Box<dyn AudioSink>> {
    match output {
        Some(path) => Ok(Box::new(FileSink::new(path))),
        None => {
            let sink = voicebridge::client::RodioSink::try_default()
                .map_err(|e| anyhow::anyhow!(e))?;
            Ok(Box::new(sink))
        }
    }
}

#[cfg(not(feature = "playback"))]
fn make_sink(output: Option<&std::path::Path>) -> Result<Box<dyn AudioSink>> {
    let path = output.unwrap_or_else(|| std::path::Path::new("speech.mp3"));
    if output.is_none() {
        eprintln!("built without the playback feature; writing audio to speech.mp3");
    }
    Ok(Box::new(FileSink::new(path)))
}
