use super::cache::VoiceCache;
use super::model::{VoiceCatalogue, VoiceDescriptor};
use super::selection::{resolve_voice_id, select_voice_index};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct VoiceService {
    tts_repo: Arc<dyn TtsRepository>,
    cache: VoiceCache,
    default_voice: Option<String>,
}

impl VoiceService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        cache: VoiceCache,
        default_voice: Option<String>,
    ) -> Self {
        Self {
            tts_repo,
            cache,
            default_voice,
        }
    }

    /// Id of the configured preferred voice within `voices`, or of the first voice
    pub fn preferred_voice_id(&self, voices: &[VoiceDescriptor]) -> Option<String> {
        select_voice_index(voices, self.default_voice.as_deref()).map(|index| voices[index].id.clone())
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Voices offered by the provider, memoized for the cache window.
    ///
    /// Never fails: a fetch error yields an empty catalogue carrying the
    /// message to display. Failed fetches are retried on the next call.
    async fn fetch_voices(&self) -> VoiceCatalogue;

    /// Cached voices without contacting the provider
    async fn cached_voices(&self) -> Option<Arc<Vec<VoiceDescriptor>>>;

    /// Voice id to use when a request names none
    async fn default_voice_id(&self) -> String;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn fetch_voices(&self) -> VoiceCatalogue {
        let tts_repo = self.tts_repo.clone();
        let loaded = self
            .cache
            .get_or_try_load(async move { tts_repo.list_voices().await })
            .await;

        match loaded {
            Ok(voices) => VoiceCatalogue::loaded(voices.as_ref().clone()),
            Err(e) => {
                tracing::error!(
                    provider = self.tts_repo.name(),
                    error = %e,
                    "Error fetching voices"
                );
                VoiceCatalogue::failed(format!("Error fetching voices: {}", e))
            }
        }
    }

    async fn cached_voices(&self) -> Option<Arc<Vec<VoiceDescriptor>>> {
        self.cache.get().await
    }

    async fn default_voice_id(&self) -> String {
        let catalogue = self.fetch_voices().await;
        resolve_voice_id(
            &catalogue.voices,
            self.default_voice.as_deref(),
            self.tts_repo.fallback_voice_id(),
        )
    }
}
