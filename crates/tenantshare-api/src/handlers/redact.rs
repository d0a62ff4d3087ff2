//! Redaction handler.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use tenantshare_core::error::AppError;

use crate::dto::request::RedactRequest;
use crate::dto::response::RedactResponse;
use crate::extractors::TenantSession;
use crate::state::AppState;

/// POST /api/redact
pub async fn redact(
    State(state): State<AppState>,
    _session: TenantSession,
    Json(body): Json<Value>,
) -> Result<Json<RedactResponse>, AppError> {
    let request = RedactRequest::from_value(&body)?;
    let message = state.redact.text(&request.message).await?;
    Ok(Json(RedactResponse { message }))
}
