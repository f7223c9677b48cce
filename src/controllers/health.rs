use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::TtsRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(tts_repo): State<Arc<dyn TtsRepository>>) -> impl IntoResponse {
    if tts_repo.is_configured() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "provider": tts_repo.name(),
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "provider": tts_repo.name(),
                "reason": tts_repo.unavailable_reason(),
            })),
        )
    }
}
