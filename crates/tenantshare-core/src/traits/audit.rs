//! Audit sink trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::audit::AuditEvent;

/// Destination for user-activity audit events.
///
/// Callers treat delivery as best-effort: a failed `record` is logged and
/// never changes the response of the operation being audited.
#[async_trait]
pub trait AuditSink: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver one event.
    async fn record(&self, event: AuditEvent) -> AppResult<()>;
}
