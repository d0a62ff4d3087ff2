//! Tenant session configuration.

use serde::{Deserialize, Serialize};

/// Names of the trusted headers carrying the authenticated tenant identity.
///
/// An authenticating gateway in front of the proxy sets these; the proxy
/// itself never authenticates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Header carrying the organization id.
    #[serde(default = "default_org_header")]
    pub org_header: String,
    /// Header carrying the user's email.
    #[serde(default = "default_email_header")]
    pub email_header: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            org_header: default_org_header(),
            email_header: default_email_header(),
        }
    }
}

fn default_org_header() -> String {
    "x-tenant-org-id".to_string()
}

fn default_email_header() -> String {
    "x-tenant-email".to_string()
}
