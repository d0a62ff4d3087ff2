//! Audit service client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::SecondsFormat;
use serde_json::{Value, json};
use tracing::debug;

use tenantshare_core::config::audit::AuditConfig;
use tenantshare_core::error::AppError;
use tenantshare_core::result::AppResult;
use tenantshare_core::traits::audit::AuditSink;
use tenantshare_core::types::audit::AuditEvent;
use tenantshare_remote::{HttpTransport, RemoteResponse, RequestBody};

/// Audit service paths the browser component may reach through the proxy.
pub const PROXIED_PATHS: [&str; 3] = ["/v1/search", "/v1/results", "/v1/root"];

/// Event log path.
const LOG_PATH: &str = "/v1/log";

/// Client for the remote audit service.
#[derive(Debug, Clone)]
pub struct AuditClient {
    /// Transport bound to the audit service.
    transport: Arc<HttpTransport>,
    /// Event settings.
    config: AuditConfig,
}

impl AuditClient {
    /// Create an audit client.
    pub fn new(transport: Arc<HttpTransport>, config: AuditConfig) -> Self {
        Self { transport, config }
    }

    /// Forward a search-side call. Paths outside [`PROXIED_PATHS`] are
    /// rejected without contacting the remote.
    pub async fn proxy(&self, path: &str, body: Value) -> AppResult<RemoteResponse> {
        if !PROXIED_PATHS.contains(&path) {
            return Err(AppError::not_found("Invalid path"));
        }
        self.transport.request(path, RequestBody::Json(body)).await
    }

    /// `/v1/log` body for `event`.
    pub fn log_body(&self, event: &AuditEvent) -> Value {
        json!({
            "config_id": self.config.config_id,
            "event": {
                "action": event.action.to_lowercase(),
                "service_feature": self.config.service_feature,
                "message": event.message,
                "service_name": self.config.service_name,
                "status": "Success",
                "source": event.source,
                "actor": event.actor,
                "timestamp": event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            }
        })
    }
}

#[async_trait]
impl AuditSink for AuditClient {
    async fn record(&self, event: AuditEvent) -> AppResult<()> {
        let response = self
            .transport
            .request(LOG_PATH, RequestBody::Json(self.log_body(&event)))
            .await?;

        if !response.is_success() {
            return Err(AppError::external_service(format!(
                "Audit log rejected event ({}): {}",
                response.status(),
                response.text()
            )));
        }
        debug!(action = %event.action, actor = %event.actor, "Audit event recorded");
        Ok(())
    }
}

/// Sink used when auditing is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAudit;

#[async_trait]
impl AuditSink for DisabledAudit {
    async fn record(&self, _event: AuditEvent) -> AppResult<()> {
        Ok(())
    }
}
