//! Audit event type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user-activity event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// What happened, e.g. `"folder_create"`.
    pub action: String,
    /// Who did it (the user's email).
    pub actor: String,
    /// Where it came from (the organization id).
    pub source: String,
    /// Human-readable description.
    pub message: String,
    /// When it happened.
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    /// Creates an event stamped with the current time.
    pub fn now(
        action: impl Into<String>,
        actor: impl Into<String>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            actor: actor.into(),
            source: source.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
