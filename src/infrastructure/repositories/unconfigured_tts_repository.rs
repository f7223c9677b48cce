use super::tts_repository::{ProviderError, SynthesisOptions, TtsRepository};
use crate::domain::voice::VoiceDescriptor;
use async_trait::async_trait;

const PROVIDER: &str = "unconfigured";

/// Stand-in provider installed when credentials are missing.
/// Every call fails with [`ProviderError::Credentials`] and performs no I/O.
pub struct UnconfiguredTtsRepository {
    reason: String,
}

impl UnconfiguredTtsRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> ProviderError {
        ProviderError::Credentials {
            provider: PROVIDER,
            detail: self.reason.clone(),
        }
    }
}

#[async_trait]
impl TtsRepository for UnconfiguredTtsRepository {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn is_configured(&self) -> bool {
        false
    }

    fn unavailable_reason(&self) -> Option<&str> {
        Some(&self.reason)
    }

    fn supports_speed(&self) -> bool {
        false
    }

    fn fallback_voice_id(&self) -> &'static str {
        ""
    }

    fn audio_file_name(&self) -> &'static str {
        "audio.mp3"
    }

    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, ProviderError> {
        Err(self.error())
    }

    async fn synthesize(
        &self,
        _text: &str,
        _voice_id: &str,
        _options: &SynthesisOptions,
    ) -> Result<Vec<u8>, ProviderError> {
        Err(self.error())
    }
}
