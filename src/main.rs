//! TenantShare server: tenant-scoping proxy for a cloud share service.
//!
//! Main entry point that loads configuration, sets up logging, and starts
//! the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use tenantshare_cache::provider::TokenCacheManager;
use tenantshare_core::config::{AppConfig, LogFormat};
use tenantshare_core::error::AppError;
use tenantshare_core::traits::cache::TokenCache;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tenantshare-server", version, about = "Tenant-scoping share proxy")]
struct Args {
    /// Environment overlay to load (`config/{env}.toml`).
    #[arg(long, env = "TENANTSHARE_ENV", default_value = "development")]
    env: String,

    /// Directory holding `default.toml` and the environment overlays.
    #[arg(long, env = "TENANTSHARE_CONFIG_DIR", default_value = "config")]
    config_dir: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load(&args.config_dir, &args.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(
        "Loaded config from '{}' (env: {})",
        args.config_dir,
        args.env
    );

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TenantShare v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        "Initializing token cache (provider: {})...",
        config.cache.provider
    );
    let cache: Arc<dyn TokenCache> = Arc::new(TokenCacheManager::new(&config.cache)?);

    tenantshare_api::run_server(config, cache).await
}
