use serde::{Deserialize, Serialize};

/// A selectable synthetic voice offered by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    /// Provider voice id (ElevenLabs `voice_id`, Azure `ShortName`)
    pub id: String,
    pub display_name: String,
    /// ElevenLabs category or Azure gender
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VoiceDescriptor {
    /// Dropdown label, e.g. `Rachel (premade) - calm narration`
    pub fn label(&self) -> String {
        format!(
            "{} ({}) - {}",
            self.display_name,
            self.category,
            self.description.as_deref().unwrap_or("No description")
        )
    }
}

/// Voices as returned to callers of the catalogue. A failed fetch is reported
/// through `error` alongside an empty list instead of being raised.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VoiceCatalogue {
    pub voices: Vec<VoiceDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VoiceCatalogue {
    pub fn loaded(voices: Vec<VoiceDescriptor>) -> Self {
        Self {
            voices,
            error: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            voices: Vec::new(),
            error: Some(message),
        }
    }
}
