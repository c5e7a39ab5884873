//! Tracing subscriber setup shared by the server and CLI binaries.

use tracing_subscriber::{EnvFilter, fmt};

use todo_core::config::{AppConfig, LoggingConfig};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.level`. `config.format` selects JSON or
/// pretty output.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Warn about settings that are unsafe outside development. Call after
/// [`init_tracing`].
pub fn warn_insecure_settings(config: &AppConfig) {
    if config.auth.uses_insecure_secret() {
        tracing::warn!("auth.jwt_secret is the built-in default; set TODO__AUTH__JWT_SECRET");
    }
}
