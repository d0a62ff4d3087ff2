//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod audit;
pub mod cache;
pub mod logging;
pub mod remote;
pub mod session;
pub mod vault;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::audit::AuditConfig;
pub use self::cache::CacheConfig;
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::remote::RemoteConfig;
pub use self::session::SessionConfig;
pub use self::vault::VaultConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote share/audit/redact service settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Credential resolution (vault) settings.
    #[serde(default)]
    pub vault: VaultConfig,
    /// Service token cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Audit event emission settings.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Tenant session header settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `{dir}/default.toml` with an environment-specific overlay
    /// `{dir}/{env}.toml` and environment variables prefixed with
    /// `TENANTSHARE__`. Every file is optional.
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TENANTSHARE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings that have no usable default.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.remote.domain.trim().is_empty() {
            return Err(AppError::configuration("remote.domain must be set"));
        }
        if self.remote.service_token_id.trim().is_empty() {
            return Err(AppError::configuration(
                "remote.service_token_id must be set",
            ));
        }
        if self.vault.root_token.trim().is_empty() {
            return Err(AppError::configuration("vault.root_token must be set"));
        }
        if self.session.org_header.trim().is_empty() || self.session.email_header.trim().is_empty()
        {
            return Err(AppError::configuration(
                "session.org_header and session.email_header must not be empty",
            ));
        }
        Ok(())
    }
}
