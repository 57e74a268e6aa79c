// Per-run cache of media id -> resolved image URL
use crate::model::NormalizationError;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

/// Lives for one normalization run.
///
/// Each id gets one cell; concurrent callers for the same id wait on the
/// first lookup instead of issuing their own. A failed lookup leaves the
/// cell empty so a later caller may try again.
#[derive(Default)]
pub struct MediaCache {
    cells: Mutex<HashMap<u64, Arc<OnceCell<String>>>>,
}

impl MediaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn resolve<F, Fut>(&self, id: u64, lookup: F) -> Result<String, NormalizationError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, NormalizationError>>,
    {
        let cell = {
            let mut cells = self.cells.lock().await;
            cells.entry(id).or_default().clone()
        };
        cell.get_or_try_init(lookup).await.cloned()
    }

    /// Number of ids with a resolved URL.
    pub async fn resolved(&self) -> usize {
        self.cells
            .lock()
            .await
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn concurrent_resolves_share_one_lookup() {
        let cache = MediaCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;

        let lookups = (0..4).map(|_| {
            cache.resolve(9, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok("https://x.com/9.png".to_string())
            })
        });
        let results = join_all(lookups).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| r.as_deref().ok() == Some("https://x.com/9.png")));
        assert_eq!(cache.resolved().await, 1);
    }

    #[tokio::test]
    async fn failed_lookup_is_not_cached() {
        let cache = MediaCache::new();

        let first = cache
            .resolve(3, || async { Err(NormalizationError::MissingMediaUrl(3)) })
            .await;
        assert!(matches!(first, Err(NormalizationError::MissingMediaUrl(3))));
        assert_eq!(cache.resolved().await, 0);

        let second = cache
            .resolve(3, || async { Ok("https://x.com/3.png".to_string()) })
            .await;
        assert_eq!(second.unwrap(), "https://x.com/3.png");
    }
}
