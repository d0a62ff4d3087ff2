//! Buffered remote responses.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use tenantshare_core::error::{AppError, ErrorKind};
use tenantshare_core::result::AppResult;
use tenantshare_core::types::envelope::Envelope;

/// A fully buffered response from a remote service.
///
/// Remote responses are relayed to the inbound caller unchanged, so the
/// status and content type travel with the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    /// HTTP status code.
    status: u16,
    /// `Content-Type` header, if the remote sent one.
    content_type: Option<String>,
    /// Raw body.
    body: Bytes,
}

impl RemoteResponse {
    /// Build a response from its parts.
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Build a JSON response.
    pub fn from_json<T: Serialize>(status: u16, value: &T) -> AppResult<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(
            status,
            Some("application/json".to_string()),
            body,
        ))
    }

    /// The uniform 404 returned when a resource is outside the caller's
    /// tenant or does not exist.
    pub fn not_found(request_id: Option<String>) -> Self {
        let body = serde_json::to_vec(&Envelope::not_found(request_id))
            .unwrap_or_else(|_| b"{\"status\":\"NotFound\",\"result\":null}".to_vec());
        Self::new(404, Some("application/json".to_string()), body)
    }

    /// Buffer a reqwest response.
    pub async fn read(response: reqwest::Response) -> AppResult<Self> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to read remote response body: {e}"),
                e,
            )
        })?;
        Ok(Self::new(status, content_type, body))
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `Content-Type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Raw body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response, returning its body.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Remote returned an unexpected body: {e}"),
                e,
            )
        })
    }

    /// Body as (lossy) UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
