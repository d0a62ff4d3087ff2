//! Route definitions for the TenantShare HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with its state attached.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;

    let api_routes = Router::new()
        .merge(share_routes())
        .merge(audit_routes())
        .merge(redact_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Share actions and uploads
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/share", post(handlers::share::execute_action))
        .route("/share/upload", post(handlers::upload::upload))
}

/// Audit search proxy
fn audit_routes() -> Router<AppState> {
    Router::new().route("/audit/{endpoint}", post(handlers::audit::proxy))
}

/// Redaction
fn redact_routes() -> Router<AppState> {
    Router::new().route("/redact", post(handlers::redact::redact))
}

/// Health check (no session required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
