//! Audit log: event emission and the audit search proxy.

pub mod client;

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;

use tenantshare_core::traits::audit::AuditSink;
use tenantshare_core::types::audit::AuditEvent;

pub use client::{AuditClient, DisabledAudit, PROXIED_PATHS};

/// Record `event` without letting a failure reach the caller.
pub async fn emit(sink: &dyn AuditSink, event: AuditEvent) {
    let action = event.action.clone();
    if let Err(e) = sink.record(event).await {
        warn!(action = %action, error = %e, "Failed to record audit event");
    }
}

/// Record `event` on a background task so the response is not held up
/// by the audit service.
pub fn dispatch(sink: &Arc<dyn AuditSink>, event: AuditEvent) -> JoinHandle<()> {
    let sink = Arc::clone(sink);
    tokio::spawn(async move {
        emit(sink.as_ref(), event).await;
    })
}
