//! Identity of the tenant behind the current request.

use serde::{Deserialize, Serialize};

use crate::share::scope::TenantScope;

/// Session identity resolved by the upstream gateway.
///
/// Extracted by the API layer and passed into handlers so that every
/// operation knows *which* organization and user is acting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Organization id.
    pub org_id: String,
    /// User email.
    pub email: String,
}

impl SessionIdentity {
    /// Creates a new session identity.
    pub fn new(org_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            email: email.into(),
        }
    }

    /// The tenant scope for this identity.
    pub fn scope(&self) -> TenantScope {
        TenantScope::from_parts(Some(&self.org_id), Some(&self.email))
    }

    /// Audit actor.
    pub fn actor(&self) -> &str {
        &self.email
    }

    /// Audit source.
    pub fn source(&self) -> &str {
        &self.org_id
    }
}
