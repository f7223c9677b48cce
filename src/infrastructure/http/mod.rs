pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, page, tts::TtsController, voices::VoiceController};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::TtsRepository;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn create_router(
    tts_repo: Arc<dyn TtsRepository>,
    voice_controller: Arc<VoiceController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let voice_routes = Router::new()
        .route("/api/voices", get(VoiceController::list_voices))
        .with_state(voice_controller);

    let tts_routes = Router::new()
        .route("/api/tts/synthesize", post(TtsController::synthesize))
        .with_state(tts_controller);

    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_repo)
        .merge(voice_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
