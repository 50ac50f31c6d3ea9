pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, TranslateController, TtsController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Assemble the application router. Shared between the server binary and
/// the test harness.
pub fn build_router(
    config: Arc<Config>,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    let tts_routes = Router::new()
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(translate_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        // The orchestrator runs in a browser-style client on another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), translate_controller, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
