//! Interception policy: jurisdiction check, classification, lookup,
//! hit/miss handling and background revalidation

use crate::classifier::{classify, StoreKind};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::lifecycle::StoreLifecycle;
use crate::matcher::in_jurisdiction;
use crate::models::{CachedResponse, ProxiedRequest};
use crate::store::{CacheStorage, StoreHandle};
use std::sync::Arc;

/// Outcome of an interception attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intercept {
    /// Out of jurisdiction: the engine does not participate and the request
    /// proceeds through normal network handling untouched
    PassThrough,
    /// The engine claimed the request and produced this response, either
    /// from a store or from the network
    Served(CachedResponse),
}

/// The cache engine. Cloning is cheap and every clone shares the same
/// stores, so one engine can serve interceptions, background revalidation
/// tasks and the control channel concurrently.
#[derive(Debug, Clone)]
pub struct CacheEngine {
    config: Arc<EngineConfig>,
    lifecycle: StoreLifecycle,
    client: reqwest::Client,
}

impl CacheEngine {
    /// Create an engine with a fresh, empty store registry
    pub fn new(config: EngineConfig) -> Self {
        Self::with_storage(config, CacheStorage::new())
    }

    /// Create an engine on an existing registry, e.g. one that still holds
    /// stores from a previous configuration
    pub fn with_storage(config: EngineConfig, storage: CacheStorage) -> Self {
        Self {
            config: Arc::new(config),
            lifecycle: StoreLifecycle::new(storage),
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> &StoreLifecycle {
        &self.lifecycle
    }

    /// Install lifecycle event: the engine is usable immediately and does
    /// not wait for any prior instance
    pub fn install(&self) {
        log::info!("Cache engine installed");
    }

    /// Activate lifecycle event: prune every store not named by the current
    /// configuration. Must be awaited before the engine is treated as the
    /// active interceptor, so stale stores never race fresh ones.
    pub async fn activate(&self) {
        let known = self.config.known_stores();
        let removed = self.lifecycle.prune_stale(&known).await;
        log::info!("Cache engine activated, {} stale store(s) pruned", removed);
    }

    /// Handle one intercepted request.
    ///
    /// Out-of-jurisdiction requests resolve to [`Intercept::PassThrough`]
    /// without touching the network or any store. In-jurisdiction requests
    /// are classified, looked up and served from cache when possible; an
    /// API-store hit additionally spawns a fire-and-forget revalidation.
    /// On a miss the response is fetched, cached when it is a plain 200,
    /// and returned. A network failure on the miss path is the one error
    /// that propagates to the caller.
    pub async fn intercept(&self, request: &ProxiedRequest) -> Result<Intercept> {
        if !in_jurisdiction(&self.config, &request.url) {
            return Ok(Intercept::PassThrough);
        }

        let kind = classify(&self.config, &request.url);
        let store = self.lifecycle.open_or_create(kind.store_id(&self.config)).await;
        let key = request.key();

        if let Some(cached) = store.lookup(&key).await {
            log::info!("Cache hit for {}", request.url);

            // Images are immutable once cached; only API entries revalidate
            if kind == StoreKind::Api {
                self.spawn_revalidation(store, request.clone());
            }
            return Ok(Intercept::Served(cached));
        }

        log::info!("Cache miss for {}, fetching", request.url);
        let response = self.fetch(request).await?;

        if response.is_cacheable() {
            store.put(&key, response.clone()).await;
            log::debug!("Cached response for {}", key);
        } else {
            log::debug!(
                "Not caching {} (status {})",
                request.url,
                response.status
            );
        }

        Ok(Intercept::Served(response))
    }

    /// Re-issue the request over the network and snapshot the response
    async fn fetch(&self, request: &ProxiedRequest) -> Result<CachedResponse> {
        let response = self
            .client
            .request(request.method.clone(), request.url.as_str())
            .send()
            .await?;
        Ok(CachedResponse::capture(response).await?)
    }

    /// Refresh an already-served API entry in the background. The task is
    /// detached and its failures are discarded: nothing here may ever reach
    /// the caller that was just served the cached copy.
    fn spawn_revalidation(&self, store: StoreHandle, request: ProxiedRequest) {
        let engine = self.clone();
        drop(tokio::spawn(async move {
            match engine.fetch(&request).await {
                Ok(fresh) if fresh.is_cacheable() => {
                    store.put(&request.key(), fresh).await;
                    log::debug!("Revalidated {}", request.url);
                }
                Ok(fresh) => {
                    log::debug!(
                        "Revalidation of {} got status {}, keeping cached copy",
                        request.url,
                        fresh.status
                    );
                }
                Err(e) => {
                    log::debug!("Revalidation of {} failed: {}", request.url, e);
                }
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pass_through_touches_no_store() {
        let engine = CacheEngine::new(EngineConfig::default());
        let request = ProxiedRequest::get("https://example.com/card.png");

        let outcome = engine.intercept(&request).await.unwrap();

        assert_eq!(outcome, Intercept::PassThrough);
        let stats = engine.lifecycle().stats(engine.config()).await;
        assert_eq!(stats.total, 0);
    }

    #[tokio::test]
    async fn test_hit_is_served_from_the_image_store() {
        let engine = CacheEngine::new(EngineConfig::default());
        let request = ProxiedRequest::get("https://assets.tcgdex.net/en/base/base1/1/high.png");

        // Seed the store directly; no network involved on the hit path
        let store = engine
            .lifecycle()
            .open_or_create(engine.config().image_store())
            .await;
        let seeded = CachedResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "image/png".to_string())],
            body: vec![0x89, 0x50, 0x4E, 0x47],
        };
        store.put(&request.key(), seeded.clone()).await;

        let outcome = engine.intercept(&request).await.unwrap();
        assert_eq!(outcome, Intercept::Served(seeded));
    }

    #[tokio::test]
    async fn test_activate_prunes_stale_stores() {
        let storage = CacheStorage::new();
        storage.open("tcgdex-images-v0").await;
        storage.open("tcgdex-images-v1").await;

        let engine = CacheEngine::with_storage(EngineConfig::default(), storage.clone());
        engine.install();
        engine.activate().await;

        assert!(!storage.contains("tcgdex-images-v0").await);
        assert!(storage.contains("tcgdex-images-v1").await);
    }
}
