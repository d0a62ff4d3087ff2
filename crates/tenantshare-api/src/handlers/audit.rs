//! Audit search proxy handler.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;

use tenantshare_core::error::AppError;

use crate::dto::response::Proxied;
use crate::extractors::TenantSession;
use crate::state::AppState;

/// POST /api/audit/{endpoint}
///
/// Forwards to the audit service's `/v1/{endpoint}` when the endpoint is
/// one of `search`, `results`, or `root`.
pub async fn proxy(
    State(state): State<AppState>,
    _session: TenantSession,
    Path(endpoint): Path<String>,
    Json(body): Json<Value>,
) -> Result<Proxied, AppError> {
    let path = format!("/v1/{endpoint}");
    let response = state.audit_log.proxy(&path, body).await?;
    Ok(Proxied(response))
}
