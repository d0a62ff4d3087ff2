//! Integration tests for audit search proxying and event emission.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;

use crate::helpers::{EMAIL, ORG, SERVICE_TOKEN, TestApp, success, wait_for_hits};

#[tokio::test]
async fn test_search_is_proxied() {
    let app = TestApp::new().await;
    let search = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/search")
                .header("authorization", format!("Bearer {SERVICE_TOKEN}"))
                .json_body(json!({ "query": "actor:a@b.com", "limit": 10 }));
            then.status(200)
                .json_body(success(json!({ "events": [], "count": 0 })));
        })
        .await;

    let response = app
        .request(
            "POST",
            "/api/audit/search",
            Some(json!({ "query": "actor:a@b.com", "limit": 10 })),
            Some((ORG, EMAIL)),
        )
        .await;

    search.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"]["count"], 0);
}

#[tokio::test]
async fn test_unlisted_endpoint_is_not_found() {
    let app = TestApp::new().await;
    let log = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/log");
            then.status(200).json_body(success(json!({})));
        })
        .await;

    let response = app
        .request(
            "POST",
            "/api/audit/log",
            Some(json!({ "event": { "message": "forged" } })),
            Some((ORG, EMAIL)),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Invalid path");
    log.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_audit_proxy_requires_session() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/audit/search", Some(json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_share_action_emits_event() {
    let app = TestApp::with_config(|config| {
        config.audit.config_id = Some("pci_share".to_string());
    })
    .await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/share/link/list");
            then.status(200).json_body(success(
                json!({ "share_link_objects": [], "count": 0 }),
            ));
        })
        .await;
    let log = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/log").json_body_partial(
                json!({
                    "config_id": "pci_share",
                    "event": {
                        "action": "link_list",
                        "actor": EMAIL,
                        "status": "Success"
                    }
                })
                .to_string(),
            );
            then.status(200).json_body(success(json!({})));
        })
        .await;

    let response = app.share("/v1beta/share/link/list", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    wait_for_hits(&log, 1).await;
}

#[tokio::test]
async fn test_disabled_audit_emits_nothing() {
    let app = TestApp::with_config(|config| config.audit.enabled = false).await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/share/link/list");
            then.status(200).json_body(success(
                json!({ "share_link_objects": [], "count": 0 }),
            ));
        })
        .await;
    let log = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/log");
            then.status(200).json_body(success(json!({})));
        })
        .await;

    let response = app.share("/v1beta/share/link/list", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    tokio::time::sleep(Duration::from_millis(100)).await;
    log.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_audit_failure_does_not_fail_request() {
    let app = TestApp::new().await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/share/link/list");
            then.status(200).json_body(success(
                json!({ "share_link_objects": [], "count": 0 }),
            ));
        })
        .await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/log");
            then.status(500);
        })
        .await;

    let response = app.share("/v1beta/share/link/list", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_slow_audit_does_not_delay_response() {
    let app = TestApp::new().await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/share/link/list");
            then.status(200).json_body(success(
                json!({ "share_link_objects": [], "count": 0 }),
            ));
        })
        .await;
    let log = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/log");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(success(json!({})));
        })
        .await;

    let started = Instant::now();
    let response = app.share("/v1beta/share/link/list", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(started.elapsed() < Duration::from_secs(3));
    wait_for_hits(&log, 1).await;
}
