//! Maps domain `AppError` to HTTP responses.

#[allow(unused_imports)]
use axum::http::StatusCode;
#[allow(unused_imports)]
use axum::response::IntoResponse;

#[allow(unused_imports)]
use tenantshare_core::error::{AppError, ErrorKind};

// The `IntoResponse for AppError` impl must live in tenantshare-core (orphan
// rule); the mapping is re-exported here at its original path.
pub use tenantshare_core::error::{ApiErrorResponse, status_for};
