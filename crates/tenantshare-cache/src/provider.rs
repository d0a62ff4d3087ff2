//! Token cache manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use tenantshare_core::config::cache::CacheConfig;
use tenantshare_core::error::AppError;
use tenantshare_core::result::AppResult;
use tenantshare_core::traits::cache::TokenCache;

/// Token cache manager that wraps the configured cache provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct TokenCacheManager {
    /// The inner cache provider.
    inner: Arc<dyn TokenCache>,
}

impl TokenCacheManager {
    /// Create a new cache manager from configuration.
    pub fn new(config: &CacheConfig) -> AppResult<Self> {
        let inner: Arc<dyn TokenCache> = match config.provider.as_str() {
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing process-lifetime token cache");
                Arc::new(crate::memory::MemoryTokenCache::new())
            }
            #[cfg(feature = "expiring")]
            "expiring" => {
                info!(
                    max_capacity = config.max_capacity,
                    ttl_seconds = config.ttl_seconds,
                    "Initializing expiring token cache"
                );
                Arc::new(crate::expiring::ExpiringTokenCache::new(config))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown cache provider: '{other}'. Supported: memory, expiring"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a cache manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn TokenCache>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl TokenCache for TokenCacheManager {
    async fn get(&self, token_id: &str) -> AppResult<Option<String>> {
        self.inner.get(token_id).await
    }

    async fn set(&self, token_id: &str, secret: &str) -> AppResult<()> {
        self.inner.set(token_id, secret).await
    }

    async fn len(&self) -> u64 {
        self.inner.len().await
    }
}
