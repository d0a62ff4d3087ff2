//! Redact service client.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::error;

use tenantshare_core::error::AppError;
use tenantshare_core::result::AppResult;
use tenantshare_core::types::envelope::Envelope;
use tenantshare_remote::{HttpTransport, RequestBody};

/// Text redaction path.
const REDACT_PATH: &str = "/v1/redact";

#[derive(Debug, Deserialize)]
struct RedactResult {
    redacted_text: String,
}

/// Client for the remote redact service.
#[derive(Debug, Clone)]
pub struct RedactClient {
    /// Transport bound to the redact service.
    transport: Arc<HttpTransport>,
}

impl RedactClient {
    /// Create a redact client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Redact sensitive content from `text` using the configured ruleset.
    pub async fn text(&self, text: &str) -> AppResult<String> {
        let response = self
            .transport
            .request(REDACT_PATH, RequestBody::Json(json!({ "text": text })))
            .await?;

        if response.status() != 200 {
            error!(status = response.status(), body = %response.text(), "Redact call failed");
            return Err(AppError::external_service("Failed to call redact service"));
        }

        let envelope: Envelope<RedactResult> = response.json()?;
        Ok(envelope.result.redacted_text)
    }
}
