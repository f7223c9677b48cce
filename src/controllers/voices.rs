use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::{
        tts::{VoiceResponse, VoicesResponse},
        voice::{VoiceService, VoiceServiceApi},
    },
    infrastructure::repositories::TtsRepository,
};

pub struct VoiceController {
    voice_service: Arc<VoiceService>,
    tts_repo: Arc<dyn TtsRepository>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<VoiceService>, tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self {
            voice_service,
            tts_repo,
        }
    }

    /// GET /api/voices - List selectable voices.
    /// Always succeeds; a failed fetch is reported in the `error` field.
    pub async fn list_voices(State(controller): State<Arc<VoiceController>>) -> Json<VoicesResponse> {
        let catalogue = controller.voice_service.fetch_voices().await;
        let default_voice_id = controller.voice_service.preferred_voice_id(&catalogue.voices);

        Json(VoicesResponse {
            provider: controller.tts_repo.name().to_string(),
            voices: catalogue.voices.into_iter().map(VoiceResponse::from).collect(),
            default_voice_id,
            supports_speed: controller.tts_repo.supports_speed(),
            audio_file_name: controller.tts_repo.audio_file_name().to_string(),
            error: catalogue.error,
        })
    }
}
