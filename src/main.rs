use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicebridge::infrastructure::config::{Config, LogFormat};
use voicebridge::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceBridge on {}:{}",
        config.host,
        config.port
    );

    if config.google_project_id.is_empty() {
        tracing::warn!(
            "GOOGLE_PROJECT_ID is not set. Provider calls will fail until it is configured."
        );
    }
    if !std::path::Path::new(&config.google_credentials_path).exists() {
        tracing::warn!(
            credentials_path = %config.google_credentials_path,
            "Google credentials file not found. Provider calls will fail with auth errors."
        );
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Token provider (credentials are loaded lazily on first use)
    let token_provider = Arc::new(
        voicebridge::infrastructure::gcp::ServiceAccountTokenProvider::new(
            config.google_credentials_path.clone(),
        ),
    );

    // 2. Instantiate provider repositories
    tracing::info!("Instantiating provider repositories...");
    let translation_repo = Arc::new(
        voicebridge::infrastructure::repositories::GoogleTranslationRepository::new(
            config.translate_api_url.clone(),
            config.google_project_id.clone(),
            token_provider.clone(),
        ),
    );
    let speech_repo = Arc::new(
        voicebridge::infrastructure::repositories::GoogleSpeechRepository::new(
            config.tts_api_url.clone(),
            token_provider,
        ),
    );

    // 3. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(voicebridge::domain::translation::TranslationService::new(
        translation_repo,
    ));
    let speech_service = Arc::new(voicebridge::domain::speech::SpeechService::new(speech_repo));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let translate_controller = Arc::new(voicebridge::controllers::TranslateController::new(
        translation_service,
    ));
    let tts_controller = Arc::new(voicebridge::controllers::TtsController::new(speech_service));

    // Start HTTP server with all routes
    start_http_server(config, translate_controller, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebridge=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebridge=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
