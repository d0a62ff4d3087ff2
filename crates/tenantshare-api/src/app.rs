//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use tenantshare_core::config::AppConfig;
use tenantshare_core::error::AppError;
use tenantshare_core::traits::cache::TokenCache;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(CompressionLayer::new().gzip(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the TenantShare server until Ctrl+C.
pub async fn run_server(config: AppConfig, cache: Arc<dyn TokenCache>) -> Result<(), AppError> {
    info!("Starting TenantShare server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(
        domain = %config.remote.domain,
        cache = %config.cache.provider,
        audit = config.audit.enabled,
        "Initializing remote clients"
    );
    let state = AppState::build(config, cache)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("TenantShare server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("TenantShare server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
