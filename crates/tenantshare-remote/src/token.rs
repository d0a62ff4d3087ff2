//! Bearer token sources.

use std::sync::Arc;

use async_trait::async_trait;

use tenantshare_core::result::AppResult;
use tenantshare_core::traits::token::TokenSource;

use crate::vault::VaultClient;

/// A fixed credential, such as the vault root token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn bearer_token(&self) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

/// The service token stored in the vault under `token_id`.
#[derive(Debug, Clone)]
pub struct ServiceToken {
    /// Vault client that resolves and caches the token.
    vault: Arc<VaultClient>,
    /// Vault item id.
    token_id: String,
}

impl ServiceToken {
    /// Resolve `token_id` through `vault` on every call (cached by the vault).
    pub fn new(vault: Arc<VaultClient>, token_id: impl Into<String>) -> Self {
        Self {
            vault,
            token_id: token_id.into(),
        }
    }

    /// Vault item id.
    pub fn token_id(&self) -> &str {
        &self.token_id
    }
}

#[async_trait]
impl TokenSource for ServiceToken {
    async fn bearer_token(&self) -> AppResult<String> {
        self.vault.fetch_service_token(&self.token_id).await
    }
}
