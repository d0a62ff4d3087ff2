//! Bounded, expiring token cache backed by moka.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use tenantshare_core::config::cache::CacheConfig;
use tenantshare_core::result::AppResult;
use tenantshare_core::traits::cache::TokenCache;

/// Token cache that forgets entries after a fixed lifetime.
#[derive(Debug, Clone)]
pub struct ExpiringTokenCache {
    /// The underlying moka cache.
    cache: Cache<String, String>,
}

impl ExpiringTokenCache {
    /// Create a cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_limits(config.max_capacity, Duration::from_secs(config.ttl_seconds))
    }

    /// Create a cache with explicit bounds.
    pub fn with_limits(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }
}

#[async_trait]
impl TokenCache for ExpiringTokenCache {
    async fn get(&self, token_id: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(token_id).await)
    }

    async fn set(&self, token_id: &str, secret: &str) -> AppResult<()> {
        self.cache
            .insert(token_id.to_string(), secret.to_string())
            .await;
        Ok(())
    }

    async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
