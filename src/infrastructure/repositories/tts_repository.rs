use crate::domain::voice::VoiceDescriptor;
use async_trait::async_trait;

/// Failure of a single provider call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} is not configured: {detail}")]
    Credentials {
        provider: &'static str,
        detail: String,
    },

    #[error("{provider} request failed: {detail}")]
    Transport {
        provider: &'static str,
        detail: String,
    },

    #[error("{provider} returned status {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} returned an unreadable response: {detail}")]
    Decode {
        provider: &'static str,
        detail: String,
    },
}

impl ProviderError {
    /// Remote HTTP status, when the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_credentials(&self) -> bool {
        matches!(self, ProviderError::Credentials { .. })
    }
}

/// Per-call synthesis options. Providers ignore what they do not support.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesisOptions {
    pub speed: Option<f32>,
    /// Locale of the voice as listed in the catalogue, when known
    pub locale: Option<String>,
}

/// Repository for TTS provider operations.
/// Abstracts the underlying TTS provider (ElevenLabs, Azure).
///
/// Implementations issue exactly one HTTP request per call and never retry.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Provider name used in logs and API responses
    fn name(&self) -> &'static str;

    /// False when credentials are missing and every call will fail
    fn is_configured(&self) -> bool {
        true
    }

    /// Why every call will fail, when the provider is not configured
    fn unavailable_reason(&self) -> Option<&str> {
        None
    }

    /// Whether `SynthesisOptions::speed` has any effect
    fn supports_speed(&self) -> bool;

    /// Voice id used when no catalogue is available
    fn fallback_voice_id(&self) -> &'static str;

    /// File name offered for downloading synthesized audio
    fn audio_file_name(&self) -> &'static str;

    /// Fetch the provider's voice catalogue
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, ProviderError>;

    /// Synthesize `text` with `voice_id`, returning the complete MP3 payload
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        options: &SynthesisOptions,
    ) -> Result<Vec<u8>, ProviderError>;
}

/// Read an error body for a non-success response, never failing
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}
