//! Convenience result type alias for TenantShare.

use crate::error::AppError;

/// A specialized `Result` type for TenantShare operations.
pub type AppResult<T> = Result<T, AppError>;
