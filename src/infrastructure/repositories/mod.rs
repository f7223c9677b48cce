pub mod azure_tts_repository;
pub mod elevenlabs_tts_repository;
pub mod tts_repository;
pub mod unconfigured_tts_repository;

pub use azure_tts_repository::AzureTtsRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use tts_repository::{ProviderError, SynthesisOptions, TtsRepository};
pub use unconfigured_tts_repository::UnconfiguredTtsRepository;

use crate::infrastructure::config::{ConfigError, ProviderConfig};
use std::sync::Arc;

/// Build the provider selected by configuration.
/// A configuration error yields an [`UnconfiguredTtsRepository`] instead of failing.
pub fn create_tts_repository(
    provider_config: Result<ProviderConfig, ConfigError>,
    http_client: reqwest::Client,
) -> Arc<dyn TtsRepository> {
    match provider_config {
        Ok(ProviderConfig::ElevenLabs(config)) => {
            Arc::new(ElevenLabsTtsRepository::new(http_client, config))
        }
        Ok(ProviderConfig::Azure(config)) => Arc::new(AzureTtsRepository::new(http_client, config)),
        Err(e) => {
            tracing::error!(error = %e, "TTS provider is not configured; synthesis is disabled");
            Arc::new(UnconfiguredTtsRepository::new(e.to_string()))
        }
    }
}
