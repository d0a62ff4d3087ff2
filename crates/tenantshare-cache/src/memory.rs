//! Process-lifetime token cache backed by dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use tenantshare_core::result::AppResult;
use tenantshare_core::traits::cache::TokenCache;

/// In-memory token cache whose entries live until the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenCache {
    /// Token id → secret.
    entries: Arc<DashMap<String, String>>,
}

impl MemoryTokenCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenCache for MemoryTokenCache {
    async fn get(&self, token_id: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(token_id).map(|entry| entry.value().clone()))
    }

    async fn set(&self, token_id: &str, secret: &str) -> AppResult<()> {
        if self
            .entries
            .insert(token_id.to_string(), secret.to_string())
            .is_some()
        {
            debug!(token_id, "Replaced cached token");
        }
        Ok(())
    }

    async fn len(&self) -> u64 {
        self.entries.len() as u64
    }
}
