use std::io::Write;
use std::sync::Arc;
use tokio::net::TcpListener;

use voicebridge::controllers::{TranslateController, TtsController};
use voicebridge::domain::speech::SpeechService;
use voicebridge::domain::translation::TranslationService;
use voicebridge::infrastructure::config::{Config, Environment, LogFormat};
use voicebridge::infrastructure::gcp::StaticTokenProvider;
use voicebridge::infrastructure::http::build_router;
use voicebridge::infrastructure::repositories::{
    GoogleSpeechRepository, GoogleTranslationRepository,
};


use api_client::TestClient;

pub const TEST_PROJECT_ID: &str = "test-project";
pub const TEST_TOKEN: &str = "test-token";

/// Path the Google translate mock must serve for the test project
pub const TRANSLATE_MOCK_PATH: &str = "/v3/projects/test-project/locations/global:translateText";
/// Path the Google TTS mock must serve
pub const TTS_MOCK_PATH: &str = "/v1/text:synthesize";

pub struct TestContext {
    pub client: TestClient,
    pub base_url: String,
    pub translate_mock: mockito::ServerGuard,
    pub tts_mock: mockito::ServerGuard,
    // Kept alive so the readiness check sees a credentials file
    _credentials: tempfile::NamedTempFile,
}

impl TestContext {
    pub async fn new() -> Self {
        // One mock server per provider so expectations stay independent
        let translate_mock = mockito::Server::new_async().await;
        let tts_mock = mockito::Server::new_async().await;

        let mut credentials =
            tempfile::NamedTempFile::new().expect("Failed to create credentials file");
        credentials
            .write_all(br#"{"client_email": "svc@test-project.iam.gserviceaccount.com", "private_key": "unused", "token_uri": "unused"}"#)
            .expect("Failed to write credentials file");

        let config = Arc::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            google_project_id: TEST_PROJECT_ID.to_string(),
            google_credentials_path: credentials.path().to_string_lossy().to_string(),
            translate_api_url: translate_mock.url(),
            tts_api_url: tts_mock.url(),
        });

        // Wire the app exactly as main does, with a static token instead of
        // the service-account grant
        let token_provider = Arc::new(StaticTokenProvider::new(TEST_TOKEN));
        let translation_repo = Arc::new(GoogleTranslationRepository::new(
            config.translate_api_url.clone(),
            config.google_project_id.clone(),
            token_provider.clone(),
        ));
        let speech_repo = Arc::new(GoogleSpeechRepository::new(
            config.tts_api_url.clone(),
            token_provider,
        ));
        let translate_controller = Arc::new(TranslateController::new(Arc::new(
            TranslationService::new(translation_repo),
        )));
        let tts_controller = Arc::new(TtsController::new(Arc::new(SpeechService::new(
            speech_repo,
        ))));

        let app = build_router(config, translate_controller, tts_controller);

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        let client = TestClient::new(&base_url);

        Self {
            client,
            base_url,
            translate_mock,
            tts_mock,
            _credentials: credentials,
        }
    }
}
