//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tenantshare_core::config::AppConfig;
use tenantshare_core::result::AppResult;
use tenantshare_core::traits::audit::AuditSink;
use tenantshare_core::traits::cache::TokenCache;
use tenantshare_core::traits::token::TokenSource;
use tenantshare_remote::{HttpTransport, ServiceToken, VaultClient};
use tenantshare_service::{AuditClient, DisabledAudit, RedactClient, ShareClient};

/// Shared state available to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Unscoped share client; handlers derive a scoped copy per request.
    pub share: Arc<ShareClient>,
    /// Audit service client used by the search proxy.
    pub audit_log: Arc<AuditClient>,
    /// Where route audit events go (the audit client, or a no-op sink).
    pub audit: Arc<dyn AuditSink>,
    /// Redact service client.
    pub redact: Arc<RedactClient>,
}

impl AppState {
    /// Wire every remote client from configuration.
    ///
    /// All share, audit, and redact calls authenticate with the service
    /// token stored in the vault under `remote.service_token_id`.
    pub fn build(config: AppConfig, cache: Arc<dyn TokenCache>) -> AppResult<Self> {
        let vault = Arc::new(VaultClient::from_config(&config.remote, &config.vault, cache)?);
        let tokens: Arc<dyn TokenSource> = Arc::new(ServiceToken::new(
            vault,
            config.remote.service_token_id.clone(),
        ));

        let transport = |service: &str| -> AppResult<Arc<HttpTransport>> {
            Ok(Arc::new(HttpTransport::from_config(
                service,
                &config.remote,
                Arc::clone(&tokens),
            )?))
        };

        let share = Arc::new(ShareClient::new(transport("share")?));
        let audit_log = Arc::new(AuditClient::new(transport("audit")?, config.audit.clone()));
        let redact = Arc::new(RedactClient::new(transport("redact")?));

        let audit: Arc<dyn AuditSink> = if config.audit.enabled {
            Arc::clone(&audit_log) as Arc<dyn AuditSink>
        } else {
            Arc::new(DisabledAudit)
        };

        Ok(Self {
            config: Arc::new(config),
            share,
            audit_log,
            audit,
            redact,
        })
    }
}
