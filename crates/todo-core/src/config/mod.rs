//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and the environment. Each sub-module represents a
//! logical configuration section, and every field has a serde default so
//! an empty source still yields a runnable configuration.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{Argon2Config, AuthConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides,
/// e.g. `TODO__AUTH__JWT_SECRET`.
const ENV_PREFIX: &str = "TODO";

/// Longest accepted access token window: one year.
pub const MAX_ACCESS_TTL_MINUTES: u64 = 525_600;

/// Root application configuration.
///
/// Loaded once at process start and shared read-only (behind an `Arc`)
/// for the lifetime of the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first:
    /// 1. `config/default.toml`
    /// 2. `config/{env}.toml`
    /// 3. `TODO__SECTION__KEY` environment variables
    /// 4. `DATABASE_URL` (overrides `database.url`)
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", &format!("config/{env}"))
    }

    /// Load configuration from explicit base and overlay file stems.
    pub fn load_from(base: &str, overlay: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(overlay).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if !(1..=MAX_ACCESS_TTL_MINUTES).contains(&self.auth.jwt_access_ttl_minutes) {
            return Err(AppError::configuration(format!(
                "auth.jwt_access_ttl_minutes must be between 1 and {MAX_ACCESS_TTL_MINUTES}"
            )));
        }
        Ok(())
    }
}
