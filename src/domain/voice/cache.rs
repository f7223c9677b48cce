use super::model::VoiceDescriptor;
use moka::future::Cache;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Process-wide memo of the provider's voice list.
///
/// Holds at most one entry, which expires `ttl` after it was inserted and is
/// then replaced wholesale on the next load. Failed loads are not stored.
#[derive(Clone)]
pub struct VoiceCache {
    inner: Cache<(), Arc<Vec<VoiceDescriptor>>>,
}

impl VoiceCache {
    pub fn new(ttl: Duration) -> Self {
        let inner = Cache::builder().max_capacity(1).time_to_live(ttl).build();
        Self { inner }
    }

    /// Current voices, if a non-expired list is cached
    pub async fn get(&self) -> Option<Arc<Vec<VoiceDescriptor>>> {
        self.inner.get(&()).await
    }

    /// Return the cached list or run `load` once to populate it.
    /// Concurrent callers on a miss share a single `load`.
    pub async fn get_or_try_load<F, E>(&self, load: F) -> Result<Arc<Vec<VoiceDescriptor>>, Arc<E>>
    where
        F: Future<Output = Result<Vec<VoiceDescriptor>, E>>,
        E: Send + Sync + 'static,
    {
        self.inner
            .try_get_with((), async move { load.await.map(Arc::new) })
            .await
    }
}
