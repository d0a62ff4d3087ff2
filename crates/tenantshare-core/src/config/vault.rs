//! Credential resolution (vault) configuration.

use serde::{Deserialize, Serialize};

/// Vault settings used to resolve the service token.
#[derive(Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Static root credential used to authenticate against the vault service.
    #[serde(default)]
    pub root_token: String,
    /// Service name of the vault endpoint.
    #[serde(default = "default_service")]
    pub service: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root_token: String::new(),
            service: default_service(),
        }
    }
}

impl std::fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfig")
            .field("root_token", &"<redacted>")
            .field("service", &self.service)
            .finish()
    }
}

fn default_service() -> String {
    "vault".to_string()
}
