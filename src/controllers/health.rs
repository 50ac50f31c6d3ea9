use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness reports whether the Google wiring is configured. Credentials
/// are only validated on the first provider call, so this checks presence,
/// not validity.
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let project_configured = !config.google_project_id.is_empty();
    let credentials_present = std::path::Path::new(&config.google_credentials_path).exists();

    if project_configured && credentials_present {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "translate": "configured",
                "tts": "configured"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "project_configured": project_configured,
                "credentials_present": credentials_present
            })),
        )
    }
}
