//! `TenantSession` extractor: reads the tenant identity set by the
//! authenticating gateway.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use tenantshare_core::error::AppError;
use tenantshare_service::SessionIdentity;
use tenantshare_service::share::TenantScope;

use crate::state::AppState;

/// Identity of the tenant making the request.
#[derive(Debug, Clone)]
pub struct TenantSession(pub SessionIdentity);

impl TenantSession {
    /// Tenant scope for share calls.
    pub fn scope(&self) -> TenantScope {
        self.0.scope()
    }
}

impl std::ops::Deref for TenantSession {
    type Target = SessionIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl FromRequestParts<AppState> for TenantSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = &state.config.session;

        let org_id = header_value(&parts.headers, &session.org_header)
            .ok_or_else(|| AppError::unauthorized("Missing tenant organization"))?;
        let email = header_value(&parts.headers, &session.email_header)
            .ok_or_else(|| AppError::unauthorized("Missing tenant email"))?;

        Ok(TenantSession(SessionIdentity::new(org_id, email)))
    }
}
