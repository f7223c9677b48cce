use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{SynthesizeRequest, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub const X_VOICE_ID: &str = "x-voice-id";
pub const X_CHARACTER_COUNT: &str = "x-character-count";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts/synthesize - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let result = controller
            .tts_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        let disposition = HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            result.file_name
        ))
        .map_err(|e| AppError::Internal(format!("Invalid file name header: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(header::CONTENT_DISPOSITION, disposition);
        headers.insert(X_CHARACTER_COUNT, HeaderValue::from(result.char_count));
        // Caller-supplied ids may not be valid header text
        if let Ok(voice_id) = HeaderValue::from_str(&result.voice_id) {
            headers.insert(X_VOICE_ID, voice_id);
        }

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
