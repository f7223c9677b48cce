use crate::domain::voice::VoiceDescriptor;
use serde::{Deserialize, Serialize};

/// Request for POST /api/tts/synthesize
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    /// Overrides the configured text cleaning for this request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,
}

/// A voice as listed by GET /api/voices
#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceResponse {
    #[serde(flatten)]
    pub voice: VoiceDescriptor,
    pub label: String,
}

impl From<VoiceDescriptor> for VoiceResponse {
    fn from(voice: VoiceDescriptor) -> Self {
        Self {
            label: voice.label(),
            voice,
        }
    }
}

/// Response for GET /api/voices
#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub provider: String,
    pub voices: Vec<VoiceResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_voice_id: Option<String>,
    pub supports_speed: bool,
    pub audio_file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
