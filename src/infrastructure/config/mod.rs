use serde::Deserialize;
use std::env;

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translation.googleapis.com";
pub const DEFAULT_TTS_API_URL: &str = "https://texttospeech.googleapis.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Google Cloud
    pub google_project_id: String,
    pub google_credentials_path: String,
    // Provider endpoints (overridable for tests)
    pub translate_api_url: String,
    pub tts_api_url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            // An empty project id is tolerated at startup; provider calls
            // will fail and surface as upstream errors, matching the
            // behavior of running without credentials.
            google_project_id: env::var("GOOGLE_PROJECT_ID").unwrap_or_default(),
            google_credentials_path: env::var("GOOGLE_APPLICATION_CREDENTIALS")
                .unwrap_or_else(|_| "gcloud-credentials.json".to_string()),
            translate_api_url: env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            tts_api_url: env::var("TTS_API_URL")
                .unwrap_or_else(|_| DEFAULT_TTS_API_URL.to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
