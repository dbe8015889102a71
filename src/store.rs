//! Named-store registry backing the cache engine
//!
//! A process-wide registry of named key/value stores, shared by every task
//! through cheap clones. Stores materialize lazily on first open. Individual
//! reads and writes are atomic under the store lock; there is no cross-key or
//! cross-store transaction, and no de-duplication of concurrent fetches for
//! the same key (last write wins).

use crate::models::CachedResponse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry of named stores. Clones share the same underlying registry.
#[derive(Debug, Clone, Default)]
pub struct CacheStorage {
    stores: Arc<RwLock<HashMap<String, StoreHandle>>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store by name, creating it if absent. Idempotent: concurrent
    /// opens of the same name all get handles to the same store, because
    /// creation happens under the registry write lock.
    pub async fn open(&self, name: &str) -> StoreHandle {
        let mut stores = self.stores.write().await;
        stores.entry(name.to_string()).or_default().clone()
    }

    /// Delete a whole store. Returns true if it existed.
    pub async fn delete(&self, name: &str) -> bool {
        self.stores.write().await.remove(name).is_some()
    }

    /// Names of all stores currently materialized
    pub async fn store_names(&self) -> Vec<String> {
        self.stores.read().await.keys().cloned().collect()
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.stores.read().await.contains_key(name)
    }
}

/// Handle to one named store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    entries: Arc<RwLock<HashMap<String, CachedResponse>>>,
}

impl StoreHandle {
    /// Get a copy of the entry for a request key, if present
    pub async fn lookup(&self, key: &str) -> Option<CachedResponse> {
        self.entries.read().await.get(key).cloned()
    }

    /// Insert or overwrite the entry for a request key
    pub async fn put(&self, key: &str, response: CachedResponse) {
        self.entries.write().await.insert(key.to_string(), response);
    }

    /// Number of distinct cached keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
