//! Response envelope shared by every remote service.

use serde::{Deserialize, Serialize};

/// `status` value of a successful remote response.
pub const STATUS_SUCCESS: &str = "Success";

/// `status` value of a tenant-isolation not-found response.
pub const STATUS_NOT_FOUND: &str = "NotFound";

/// `summary` attached to synthesized not-found responses.
pub const NOT_FOUND_SUMMARY: &str = "Resource was not found";

/// The `{ request_id, status, summary, result }` body returned by remote
/// services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Remote request id, echoed for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// `"Success"` or an error code.
    pub status: String,
    /// Human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Operation-specific payload.
    pub result: T,
}

impl<T> Envelope<T> {
    /// Whether `status` reports success (case-insensitive).
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_SUCCESS)
    }
}

impl Envelope<()> {
    /// The uniform not-found body; `result` serializes as `null`.
    pub fn not_found(request_id: Option<String>) -> Self {
        Self {
            request_id,
            status: STATUS_NOT_FOUND.to_string(),
            summary: Some(NOT_FOUND_SUMMARY.to_string()),
            result: (),
        }
    }
}
