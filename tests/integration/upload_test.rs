//! Integration tests for multipart uploads.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::json;

use crate::helpers::{EMAIL, ORG, TestApp, assert_not_found, object, success};

const BOUNDARY: &str = "tenantshare-test-boundary";

fn upload_request(app: &TestApp, request_json: &str, file: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"request\"\r\n\
         Content-Type: application/json\r\n\r\n\
         {request_json}\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"upload\"; filename=\"a.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {file}\r\n\
         --{BOUNDARY}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri("/api/share/upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(app.config.session.org_header.as_str(), ORG)
        .header(app.config.session.email_header.as_str(), EMAIL)
        .body(Body::from(body))
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_upload_lands_under_tenant_root() {
    let app = TestApp::new().await;
    let put = app
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/put")
                .body_contains(r#""path":"/org1/a@b.com/docs/a.txt""#)
                .body_contains("hello world");
            then.status(200).json_body(success(json!({
                "object": object("pos_3", "a.txt", "/org1/a@b.com/docs", "file")
            })));
        })
        .await;

    let response = app
        .send(upload_request(
            &app,
            r#"{"name":"a.txt","path":"/docs"}"#,
            "hello world",
        ))
        .await;

    put.assert_async().await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_upload_into_foreign_parent_is_not_found() {
    let app = TestApp::new().await;
    app.server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/get")
                .json_body(json!({ "id": "pos_foreign" }));
            then.status(200).json_body(success(json!({
                "object": object("pos_foreign", "docs", "/org2/c@d.com", "folder")
            })));
        })
        .await;
    let put = app
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/v1beta/put");
            then.status(200).json_body(success(json!({})));
        })
        .await;

    let response = app
        .send(upload_request(
            &app,
            r#"{"name":"a.txt","parent_id":"pos_foreign"}"#,
            "hello world",
        ))
        .await;

    assert_not_found(&response);
    put.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_upload_without_request_part_is_rejected() {
    let app = TestApp::new().await;
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"upload\"; filename=\"a.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         hello\r\n\
         --{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/share/upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(app.config.session.org_header.as_str(), ORG)
        .header(app.config.session.email_header.as_str(), EMAIL)
        .body(Body::from(body))
        .expect("Failed to build request");

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
