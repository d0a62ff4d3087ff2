//! Response DTOs.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use tenantshare_remote::RemoteResponse;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Redaction result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactResponse {
    /// Redacted text.
    pub message: String,
}

/// A remote response relayed to the caller unchanged.
///
/// A missing content type is reported as `application/json`.
#[derive(Debug)]
pub struct Proxied(pub RemoteResponse);

impl IntoResponse for Proxied {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = self
            .0
            .content_type()
            .and_then(|ct| HeaderValue::from_str(ct).ok())
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        (status, [(header::CONTENT_TYPE, content_type)], self.0.into_body()).into_response()
    }
}
