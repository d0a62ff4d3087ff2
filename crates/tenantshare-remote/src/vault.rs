//! Vault credential provider.
//!
//! Resolves the service token used for share, audit, and redact calls.
//! Tokens are fetched once per id and kept in the configured
//! [`TokenCache`]; concurrent first requests may both fetch, and the
//! second write simply overwrites the first with the same value.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use tenantshare_core::config::remote::RemoteConfig;
use tenantshare_core::config::vault::VaultConfig;
use tenantshare_core::error::AppError;
use tenantshare_core::result::AppResult;
use tenantshare_core::traits::cache::TokenCache;
use tenantshare_core::types::envelope::Envelope;

use crate::body::RequestBody;
use crate::token::StaticToken;
use crate::transport::HttpTransport;

/// Secret lookup path on the vault service.
const SECRET_GET_PATH: &str = "/v1/get";

#[derive(Debug, Deserialize)]
struct SecretResult {
    current_version: SecretVersion,
}

#[derive(Debug, Deserialize)]
struct SecretVersion {
    secret: String,
}

/// Client for the vault service.
#[derive(Debug, Clone)]
pub struct VaultClient {
    /// Transport authenticated with the static root token.
    transport: HttpTransport,
    /// Token id → secret.
    cache: Arc<dyn TokenCache>,
}

impl VaultClient {
    /// Create a vault client over an existing transport.
    pub fn new(transport: HttpTransport, cache: Arc<dyn TokenCache>) -> Self {
        Self { transport, cache }
    }

    /// Create a vault client authenticated with `vault.root_token`.
    pub fn from_config(
        remote: &RemoteConfig,
        vault: &VaultConfig,
        cache: Arc<dyn TokenCache>,
    ) -> AppResult<Self> {
        let transport = HttpTransport::from_config(
            &vault.service,
            remote,
            Arc::new(StaticToken::new(vault.root_token.clone())),
        )?;
        Ok(Self::new(transport, cache))
    }

    /// Return the secret stored under `token_id`, fetching it on a cache miss.
    pub async fn fetch_service_token(&self, token_id: &str) -> AppResult<String> {
        if let Some(secret) = self.cache.get(token_id).await? {
            return Ok(secret);
        }

        let response = self
            .transport
            .request(SECRET_GET_PATH, RequestBody::Json(json!({ "id": token_id })))
            .await?;

        if response.status() != 200 {
            let text = response.text();
            error!(token_id, status = response.status(), "Vault token fetch failed");
            return Err(AppError::credential(format!(
                "Failed to fetch vault token: {text}"
            )));
        }

        let envelope: Envelope<SecretResult> = response.json().map_err(|e| {
            AppError::credential(format!("Failed to fetch vault token: {}", e.message))
        })?;
        let secret = envelope.result.current_version.secret;

        self.cache.set(token_id, &secret).await?;
        info!(token_id, "Service token fetched from vault");
        Ok(secret)
    }
}
