//! Remote service (share, audit, redact) configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Settings shared by every outbound client.
///
/// Service URLs are built as `{protocol}://{service}.{domain}{path}` unless
/// `endpoint_overrides` maps the service name to an explicit base URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Cloud domain, e.g. `aws.us.pangea.cloud`.
    #[serde(default)]
    pub domain: String,
    /// URL scheme.
    #[serde(default = "default_protocol")]
    pub protocol: String,
    /// Whether 202 responses are polled until they resolve.
    #[serde(default = "default_true")]
    pub resolve_async: bool,
    /// Maximum number of polls for a 202 response.
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Backoff unit between polls in milliseconds; poll k waits k units.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Vault item id of the service token used for share/audit/redact calls.
    #[serde(default)]
    pub service_token_id: String,
    /// Service name → base URL, bypassing the `{service}.{domain}` scheme.
    #[serde(default)]
    pub endpoint_overrides: HashMap<String, String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            protocol: default_protocol(),
            resolve_async: true,
            retries: default_retries(),
            backoff_ms: default_backoff_ms(),
            request_timeout_seconds: default_request_timeout(),
            service_token_id: String::new(),
            endpoint_overrides: HashMap::new(),
        }
    }
}

fn default_protocol() -> String {
    "https".to_string()
}

fn default_true() -> bool {
    true
}

fn default_retries() -> u32 {
    5
}

fn default_backoff_ms() -> u64 {
    250
}

fn default_request_timeout() -> u64 {
    30
}
