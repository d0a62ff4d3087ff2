//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::Mock;
use httpmock::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

use tenantshare_api::{AppState, build_app};
use tenantshare_cache::memory::MemoryTokenCache;
use tenantshare_core::config::AppConfig;

/// Vault item id of the service token.
pub const SERVICE_TOKEN_ID: &str = "pvi_share";

/// Secret the mocked vault hands out.
pub const SERVICE_TOKEN: &str = "svc-token";

/// Tenant used by most tests.
pub const ORG: &str = "org1";
pub const EMAIL: &str = "a@b.com";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Mock standing in for every remote service
    pub server: MockServer,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with the default test config
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application, letting the caller adjust the config
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let server = MockServer::start_async().await;

        let mut config = AppConfig::default();
        config.remote.domain = "cloud.test".to_string();
        config.remote.protocol = "http".to_string();
        config.remote.service_token_id = SERVICE_TOKEN_ID.to_string();
        config.remote.retries = 3;
        config.remote.backoff_ms = 10;
        config.vault.root_token = "root-token".to_string();
        for service in ["share", "audit", "redact", "vault"] {
            config
                .remote
                .endpoint_overrides
                .insert(service.to_string(), server.base_url());
        }
        adjust(&mut config);
        config.validate().expect("Invalid test config");

        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/get")
                    .header("authorization", "Bearer root-token")
                    .json_body(json!({ "id": SERVICE_TOKEN_ID }));
                then.status(200).json_body(json!({
                    "request_id": "prq_vault",
                    "status": "Success",
                    "result": { "current_version": { "secret": SERVICE_TOKEN } }
                }));
            })
            .await;

        let cache = Arc::new(MemoryTokenCache::new());
        let state = AppState::build(config.clone(), cache).expect("Failed to build state");
        let router = build_app(state);

        Self {
            router,
            server,
            config,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        tenant: Option<(&str, &str)>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some((org, email)) = tenant {
            req = req
                .header(self.config.session.org_header.as_str(), org)
                .header(self.config.session.email_header.as_str(), email);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST a share action as the default tenant
    pub async fn share(&self, path: &str, params: Value) -> TestResponse {
        self.request(
            "POST",
            "/api/share",
            Some(json!({ "path": path, "params": params })),
            Some((ORG, EMAIL)),
        )
        .await
    }

    /// Send a prepared request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        TestResponse { status, body }
    }
}

/// Simplified test response
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON
    pub body: Value,
}

/// A successful remote envelope around `result`.
pub fn success(result: Value) -> Value {
    json!({
        "request_id": "prq_test",
        "status": "Success",
        "summary": "ok",
        "result": result
    })
}

/// A stored object as the share service reports it.
pub fn object(id: &str, name: &str, folder: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "folder": folder,
        "type": kind,
        "tags": []
    })
}

/// Assert the uniform tenant-isolation not-found body.
pub fn assert_not_found(response: &TestResponse) {
    assert_eq!(response.status, StatusCode::NOT_FOUND, "{:?}", response.body);
    assert_eq!(response.body["status"], "NotFound");
    assert_eq!(response.body["summary"], "Resource was not found");
    assert!(response.body["result"].is_null());
}

/// Wait until `mock` has been hit `expected` times, for work that
/// finishes after the response (audit delivery).
pub async fn wait_for_hits(mock: &Mock<'_>, expected: usize) {
    for _ in 0..200 {
        if mock.hits_async().await >= expected {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    mock.assert_hits_async(expected).await;
}
