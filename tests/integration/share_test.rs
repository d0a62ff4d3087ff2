//! Integration tests for scoped share actions.

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;

use crate::helpers::{SERVICE_TOKEN, TestApp, object, success};

#[tokio::test]
async fn test_health_needs_no_session() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_share_requires_session() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/share",
            Some(json!({ "path": "/v1beta/list", "params": {} })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_action_is_rejected() {
    let app = TestApp::new().await;

    let response = app.share("/v1beta/share/bucket/create", json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("is not implemented or does not exist")
    );
}

#[tokio::test]
async fn test_list_defaults_to_tenant_root() {
    let app = TestApp::new().await;
    let list = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/list")
                .header("authorization", format!("Bearer {SERVICE_TOKEN}"))
                .json_body(json!({ "filter": { "folder": "/org1/a@b.com" } }));
            then.status(200).json_body(success(json!({
                "objects": [
                    object("pos_1", "docs", "/org1/a@b.com", "folder"),
                    object("pos_2", "a.txt", "/org1/a@b.com/docs", "file"),
                ],
                "count": 2
            })));
        })
        .await;

    let response = app.share("/v1beta/list", json!({})).await;

    list.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
    let objects = response.body["result"]["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["folder"], "/");
    assert_eq!(objects[1]["folder"], "/docs");
    assert_eq!(response.body["result"]["count"], 2);
}

#[tokio::test]
async fn test_list_relative_folder_is_prefixed() {
    let app = TestApp::new().await;
    let list = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/list")
                .json_body_partial(
                    json!({ "filter": { "folder": "/org1/a@b.com/docs" }, "size": 20 })
                        .to_string(),
                );
            then.status(200)
                .json_body(success(json!({ "objects": [], "count": 0 })));
        })
        .await;

    let response = app
        .share(
            "/v1beta/list",
            json!({ "filter": { "folder": "/docs" }, "size": 20 }),
        )
        .await;

    list.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_returns_stripped_metadata() {
    let app = TestApp::new().await;
    let get = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/get")
                .json_body(json!({ "id": "pos_2" }));
            then.status(200).json_body(success(json!({
                "object": object("pos_2", "a.txt", "/org1/a@b.com/docs", "file")
            })));
        })
        .await;

    let response = app.share("/v1beta/get", json!({ "id": "pos_2" })).await;

    get.assert_hits_async(1).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"]["object"]["folder"], "/docs");
}

#[tokio::test]
async fn test_get_with_transfer_method_forwards_download() {
    let app = TestApp::new().await;
    let probe = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/get")
                .json_body(json!({ "id": "pos_2" }));
            then.status(200).json_body(success(json!({
                "object": object("pos_2", "a.txt", "/org1/a@b.com", "file")
            })));
        })
        .await;
    let download = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/get")
                .json_body(json!({ "id": "pos_2", "transfer_method": "dest-url" }));
            then.status(200).json_body(success(json!({
                "dest_url": "https://download.test/pos_2",
                "object": object("pos_2", "a.txt", "/org1/a@b.com", "file")
            })));
        })
        .await;

    let response = app
        .share(
            "/v1beta/get",
            json!({ "id": "pos_2", "transfer_method": "dest-url" }),
        )
        .await;

    probe.assert_async().await;
    download.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"]["dest_url"], "https://download.test/pos_2");
    assert_eq!(response.body["result"]["object"]["folder"], "/");
}

#[tokio::test]
async fn test_folder_create_lands_under_root() {
    let app = TestApp::new().await;
    let create = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/folder/create")
                .json_body(json!({ "path": "/org1/a@b.com/reports" }));
            then.status(200).json_body(success(json!({
                "object": object("pos_9", "reports", "/org1/a@b.com", "folder")
            })));
        })
        .await;

    let response = app
        .share("/v1beta/folder/create", json!({ "name": "reports" }))
        .await;

    create.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_link_stamps_tags_and_limit() {
    let app = TestApp::new().await;
    let ownership = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/list").json_body(json!({
                "filter": { "id__in": ["pos_2"] }
            }));
            then.status(200).json_body(success(json!({
                "objects": [object("pos_2", "a.txt", "/org1/a@b.com", "file")],
                "count": 1
            })));
        })
        .await;
    let create = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/share/link/create")
                .json_body(json!({
                    "links": [{
                        "targets": ["pos_2"],
                        "link_type": "download",
                        "tags": ["org:org1", "owner:a@b.com"],
                        "max_access_count": 7
                    }]
                }));
            then.status(200)
                .json_body(success(json!({ "share_link_objects": [] })));
        })
        .await;

    let response = app
        .share(
            "/v1beta/share/link/create",
            json!({
                "links": [{
                    "targets": ["pos_2"],
                    "link_type": "download",
                    "max_access_count": 1000
                }]
            }),
        )
        .await;

    ownership.assert_async().await;
    create.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_links_requires_tenant_tags() {
    let app = TestApp::new().await;
    let list = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/share/link/list")
                .json_body(json!({ "filter": { "tags": ["org:org1", "owner:a@b.com"] } }));
            then.status(200).json_body(success(
                json!({ "share_link_objects": [], "count": 0 }),
            ));
        })
        .await;

    let response = app.share("/v1beta/share/link/list", json!({})).await;

    list.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_send_link_uses_tenant_email() {
    let app = TestApp::new().await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/share/link/list");
            then.status(200).json_body(success(json!({
                "share_link_objects": [
                    { "id": "psl_1", "tags": ["org:org1", "owner:a@b.com"] }
                ],
                "count": 1
            })));
        })
        .await;
    let send = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/share/link/send")
                .json_body(json!({
                    "links": [{ "id": "psl_1", "email": "friend@x.com" }],
                    "sender_email": "a@b.com"
                }));
            then.status(200)
                .json_body(success(json!({ "share_link_objects": [] })));
        })
        .await;

    let response = app
        .share(
            "/v1beta/share/link/send",
            json!({
                "links": [{ "id": "psl_1", "email": "friend@x.com" }],
                "sender_email": "spoof@evil.com"
            }),
        )
        .await;

    send.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_remote_error_is_relayed() {
    let app = TestApp::new().await;
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/share/link/list");
            then.status(400).json_body(json!({
                "request_id": "prq_bad",
                "status": "ValidationError",
                "summary": "bad filter",
                "result": null
            }));
        })
        .await;

    let response = app.share("/v1beta/share/link/list", json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "ValidationError");
}

#[tokio::test]
async fn test_accepted_response_is_resolved() {
    let app = TestApp::new().await;
    let location = app.server.url("/request/prq_async");
    app.server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/share/link/list");
            then.status(202).json_body(json!({
                "request_id": "prq_async",
                "status": "Accepted",
                "result": { "location": location }
            }));
        })
        .await;
    let poll = app
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/request/prq_async")
                .header("authorization", format!("Bearer {SERVICE_TOKEN}"));
            then.status(200).json_body(success(
                json!({ "share_link_objects": [], "count": 0 }),
            ));
        })
        .await;

    let response = app.share("/v1beta/share/link/list", json!({})).await;

    poll.assert_hits_async(1).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Success");
}

#[tokio::test]
async fn test_service_token_is_fetched_once() {
    let vault_server = MockServer::start_async().await;
    let vault = vault_server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/get");
            then.status(200).json_body(success(json!({
                "current_version": { "secret": SERVICE_TOKEN }
            })));
        })
        .await;
    let vault_url = vault_server.base_url();
    let app = TestApp::with_config(|config| {
        config
            .remote
            .endpoint_overrides
            .insert("vault".to_string(), vault_url);
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

    for _ in 0..3 {
        let response = app.share("/v1beta/share/link/list", json!({})).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    vault.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_vault_failure_is_bad_gateway() {
    let vault_server = MockServer::start_async().await;
    vault_server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/get");
            then.status(403).body("forbidden");
        })
        .await;
    let vault_url = vault_server.base_url();
    let app = TestApp::with_config(|config| {
        config
            .remote
            .endpoint_overrides
            .insert("vault".to_string(), vault_url);
    })
    .await;

    let response = app.share("/v1beta/share/link/list", json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "CREDENTIAL_ERROR");
}

#[tokio::test]
async fn test_invalid_params_are_rejected() {
    let app = TestApp::new().await;

    let response = app.share("/v1beta/share/link/delete", json!({ "ids": [] })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
