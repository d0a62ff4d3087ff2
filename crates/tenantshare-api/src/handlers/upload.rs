//! Upload handler.

use axum::extract::{Multipart, State};

use tenantshare_core::error::AppError;
use tenantshare_core::types::audit::AuditEvent;
use tenantshare_remote::{FormPart, MultipartBody};
use tenantshare_service::audit::dispatch;

use crate::dto::response::Proxied;
use crate::extractors::TenantSession;
use crate::state::AppState;

/// POST /api/share/upload
///
/// Multipart form with a JSON `request` part and the file part(s).
pub async fn upload(
    State(state): State<AppState>,
    session: TenantSession,
    mut multipart: Multipart,
) -> Result<Proxied, AppError> {
    let mut form = MultipartBody::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            AppError::validation(format!("Failed to read multipart field '{name}': {e}"))
        })?;

        form.push(FormPart {
            name,
            file_name,
            content_type,
            data,
        });
    }

    let response = state.share.scoped(session.scope()).upload(form).await?;

    dispatch(
        &state.audit,
        AuditEvent::now(
            "upload",
            session.actor(),
            session.source(),
            format!("File upload completed with status {}", response.status()),
        ),
    );

    Ok(Proxied(response))
}
