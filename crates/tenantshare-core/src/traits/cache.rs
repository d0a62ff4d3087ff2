//! Token cache trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Process-wide map from a logical token id to its secret value.
///
/// Concurrent writers for the same key are allowed to race; the values
/// they store for one key are equivalent, so the last write wins.
#[async_trait]
pub trait TokenCache: Send + Sync + std::fmt::Debug + 'static {
    /// Get the cached secret for a token id.
    async fn get(&self, token_id: &str) -> AppResult<Option<String>>;

    /// Store the secret for a token id, replacing any previous value.
    async fn set(&self, token_id: &str, secret: &str) -> AppResult<()>;

    /// Number of cached entries (approximate for expiring providers).
    async fn len(&self) -> u64;

    /// Whether the cache currently holds no entries.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
