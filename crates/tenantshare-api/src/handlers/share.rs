//! Share action handler.

use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::debug;

use tenantshare_core::error::AppError;
use tenantshare_core::types::audit::AuditEvent;
use tenantshare_service::ShareAction;
use tenantshare_service::audit::dispatch;

use crate::dto::response::Proxied;
use crate::extractors::TenantSession;
use crate::state::AppState;

/// POST /api/share
///
/// Body: `{ "path": "/v1beta/<action>", "params": { .. } }`.
pub async fn execute_action(
    State(state): State<AppState>,
    session: TenantSession,
    Json(body): Json<Value>,
) -> Result<Proxied, AppError> {
    let action = ShareAction::parse(body)?;
    let name = action.name();
    let client = state.share.scoped(session.scope());

    debug!(action = name, org_id = %session.org_id, "Executing share action");
    let response = action.execute(&client).await?;

    dispatch(
        &state.audit,
        AuditEvent::now(
            name,
            session.actor(),
            session.source(),
            format!("Share action {name} completed with status {}", response.status()),
        ),
    );

    Ok(Proxied(response))
}
