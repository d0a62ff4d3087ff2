//! Service token cache configuration.

use serde::{Deserialize, Serialize};

/// Token cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache provider type: `"memory"` (never expires) or `"expiring"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Maximum number of entries for the expiring provider.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Entry lifetime in seconds for the expiring provider.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            max_capacity: default_max_capacity(),
            ttl_seconds: default_ttl(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_max_capacity() -> u64 {
    1000
}

fn default_ttl() -> u64 {
    3600
}
