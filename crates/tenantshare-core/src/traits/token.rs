//! Bearer token source trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Supplies the bearer token attached to every outbound call.
///
/// Implementations range from a static credential to a vault-backed
/// service token resolved through a cache.
#[async_trait]
pub trait TokenSource: Send + Sync + std::fmt::Debug + 'static {
    /// Return the token to send as `Authorization: Bearer {token}`.
    async fn bearer_token(&self) -> AppResult<String>;
}
