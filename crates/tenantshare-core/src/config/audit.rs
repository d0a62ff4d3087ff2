//! Audit event emission configuration.

use serde::{Deserialize, Serialize};

/// Settings for the audit log events emitted by route handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Whether events are sent to the audit service.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Audit configuration id, when the audit service hosts several.
    #[serde(default)]
    pub config_id: Option<String>,
    /// Value of the event `service_name` field.
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Value of the event `service_feature` field.
    #[serde(default = "default_service_feature")]
    pub service_feature: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            config_id: None,
            service_name: default_service_name(),
            service_feature: default_service_feature(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_service_name() -> String {
    "Share".to_string()
}

fn default_service_feature() -> String {
    "user_activity".to_string()
}
