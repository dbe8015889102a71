//! Store lifecycle: creation, stale-store pruning, clearing and statistics

use crate::config::EngineConfig;
use crate::store::{CacheStorage, StoreHandle};
use serde::Serialize;

/// Entry counts reported by the `CACHE_STATS` control command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub images: usize,
    pub api: usize,
    pub total: usize,
}

/// Owns creation, pruning and destruction of the named stores.
/// All operations take the known-store set explicitly so they stay
/// testable against any registry content.
#[derive(Debug, Clone)]
pub struct StoreLifecycle {
    storage: CacheStorage,
}

impl StoreLifecycle {
    pub fn new(storage: CacheStorage) -> Self {
        Self { storage }
    }

    /// Open a store by name, creating it on first use
    pub async fn open_or_create(&self, id: &str) -> StoreHandle {
        self.storage.open(id).await
    }

    /// Delete every store whose name is not in `known`. Runs at activation
    /// and is awaited to completion before the engine starts serving, so
    /// stale and fresh stores never race. Returns the number removed.
    pub async fn prune_stale(&self, known: &[&str]) -> usize {
        let mut removed = 0;
        for name in self.storage.store_names().await {
            if !known.contains(&name.as_str()) {
                self.storage.delete(&name).await;
                log::info!("Pruned stale store: {}", name);
                removed += 1;
            }
        }
        removed
    }

    /// Delete all known stores unconditionally. Returns true only when every
    /// deletion completed; a store that was never materialized counts as
    /// cleared, since the end state is the same.
    pub async fn drop_known(&self, known: &[&str]) -> bool {
        for id in known {
            if self.storage.delete(id).await {
                log::info!("Dropped store: {}", id);
            }
        }
        true
    }

    /// Distinct key counts for both known stores plus the total
    pub async fn stats(&self, config: &EngineConfig) -> CacheStats {
        let images = self.storage.open(config.image_store()).await.len().await;
        let api = self.storage.open(config.api_store()).await.len().await;
        CacheStats {
            images,
            api,
            total: images + api,
        }
    }
}
