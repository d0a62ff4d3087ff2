//! Request DTOs.

use serde_json::Value;

use tenantshare_core::error::AppError;
use tenantshare_core::result::AppResult;

/// Body of `POST /api/redact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactRequest {
    /// Text to redact.
    pub message: String,
}

impl RedactRequest {
    /// Validate a raw JSON body.
    pub fn from_value(body: &Value) -> AppResult<Self> {
        match body.get("message") {
            None | Some(Value::Null) => Err(AppError::validation("Message field is required")),
            Some(Value::String(s)) if s.is_empty() => {
                Err(AppError::validation("Message field is required"))
            }
            Some(Value::String(s)) => Ok(Self { message: s.clone() }),
            Some(_) => Err(AppError::validation("Message field must be a string")),
        }
    }
}
