//! Bearer-authenticated HTTP transport with 202 resolution.
//!
//! Every remote service (share, audit, redact, vault) is reached through
//! an [`HttpTransport`] bound to one service name. A POST that answers
//! `202 Accepted` is, when enabled, followed by a bounded sequence of GET
//! polls against the `result.location` URL the remote hands back.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use tenantshare_core::config::remote::RemoteConfig;
use tenantshare_core::error::{AppError, ErrorKind};
use tenantshare_core::result::AppResult;
use tenantshare_core::traits::token::TokenSource;

use crate::body::RequestBody;
use crate::response::RemoteResponse;

/// HTTP status of an accepted-but-pending remote operation.
const STATUS_ACCEPTED: u16 = 202;

/// Connection and polling settings for one service.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// URL scheme.
    pub protocol: String,
    /// Cloud domain.
    pub domain: String,
    /// Explicit base URL replacing `{protocol}://{service}.{domain}`.
    pub base_url: Option<String>,
    /// Whether 202 responses are polled.
    pub resolve_async: bool,
    /// Maximum number of polls.
    pub retries: u32,
    /// Backoff unit; poll k is followed by a `k × unit` sleep.
    pub backoff_unit: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl TransportOptions {
    /// Derive options for `service` from the remote configuration.
    pub fn from_config(service: &str, config: &RemoteConfig) -> Self {
        Self {
            protocol: config.protocol.clone(),
            domain: config.domain.clone(),
            base_url: config.endpoint_overrides.get(service).cloned(),
            resolve_async: config.resolve_async,
            retries: config.retries,
            backoff_unit: Duration::from_millis(config.backoff_ms),
            request_timeout: Duration::from_secs(config.request_timeout_seconds),
        }
    }
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self::from_config("", &RemoteConfig::default())
    }
}

/// Outbound client for one remote service.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Service name, the first DNS label of the service host.
    service: String,
    /// Connection and polling settings.
    options: TransportOptions,
    /// Shared reqwest client.
    http: reqwest::Client,
    /// Source of the bearer token attached to every call.
    tokens: Arc<dyn TokenSource>,
}

impl HttpTransport {
    /// Create a transport for `service`.
    pub fn new(
        service: impl Into<String>,
        options: TransportOptions,
        tokens: Arc<dyn TokenSource>,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            service: service.into(),
            options,
            http,
            tokens,
        })
    }

    /// Create a transport for `service` from the remote configuration.
    pub fn from_config(
        service: &str,
        config: &RemoteConfig,
        tokens: Arc<dyn TokenSource>,
    ) -> AppResult<Self> {
        Self::new(service, TransportOptions::from_config(service, config), tokens)
    }

    /// Service name.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Connection and polling settings.
    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    /// Absolute URL of `path` on this service.
    pub fn make_url(&self, path: &str) -> String {
        let path = normalize_path(path);
        match &self.options.base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => format!(
                "{}://{}.{}{}",
                self.options.protocol, self.service, self.options.domain, path
            ),
        }
    }

    /// POST `body` to `path`, resolving a 202 answer when enabled.
    ///
    /// Non-2xx answers are returned, not raised.
    pub async fn request(&self, path: &str, body: RequestBody) -> AppResult<RemoteResponse> {
        let url = self.make_url(path);
        let token = self.tokens.bearer_token().await?;

        let builder = self.http.post(&url).bearer_auth(&token);
        let builder = match body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form.into_form()?),
        };

        let response = builder.send().await.map_err(|e| self.send_error(&url, e))?;
        let response = RemoteResponse::read(response).await?;

        debug!(
            service = %self.service,
            path = %normalize_path(path),
            status = response.status(),
            "Remote call completed"
        );

        if !self.options.resolve_async || response.status() != STATUS_ACCEPTED {
            return Ok(response);
        }

        let location = accepted_location(&response).ok_or_else(|| {
            AppError::external_service(format!(
                "{} answered 202 for {} without result.location",
                self.service,
                normalize_path(path)
            ))
        })?;
        self.resolve_accepted(&location).await
    }

    /// Poll `location` until it stops answering 202.
    ///
    /// Poll k (1-based) that still answers 202 is followed by a sleep of
    /// `k × backoff_unit`, except after the last allowed poll.
    pub async fn resolve_accepted(&self, location: &str) -> AppResult<RemoteResponse> {
        let token = self.tokens.bearer_token().await?;
        let retries = self.options.retries;

        for attempt in 1..=retries {
            let response = self
                .http
                .get(location)
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| self.send_error(location, e))?;
            let response = RemoteResponse::read(response).await?;

            if response.status() != STATUS_ACCEPTED {
                debug!(
                    service = %self.service,
                    attempt,
                    status = response.status(),
                    "Accepted request resolved"
                );
                return Ok(response);
            }

            if attempt < retries {
                tokio::time::sleep(self.options.backoff_unit * attempt).await;
            }
        }

        warn!(service = %self.service, retries, "Accepted request did not resolve");
        Err(AppError::async_timeout(format!(
            "Could not resolve 202 response from {} within {retries} attempts",
            self.service
        )))
    }

    fn send_error(&self, url: &str, err: reqwest::Error) -> AppError {
        AppError::with_source(
            ErrorKind::ExternalService,
            format!("Request to {} failed ({url}): {err}", self.service),
            err,
        )
    }
}

/// Ensure `path` starts with `/`.
fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// `result.location` of a 202 body.
fn accepted_location(response: &RemoteResponse) -> Option<String> {
    let body: serde_json::Value = serde_json::from_slice(response.body()).ok()?;
    body.pointer("/result/location")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
