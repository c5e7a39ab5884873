//! To-do service server.
//!
//! Main entry point that loads configuration, connects to PostgreSQL, and
//! starts the HTTP API.

use std::sync::Arc;

use todo_api::AppState;
use todo_core::config::AppConfig;
use todo_core::error::AppError;
use todo_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    todo_api::telemetry::init_tracing(&config.logging);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TODO_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting to-do service");
    todo_api::telemetry::warn_insecure_settings(&config);

    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        todo_database::migration::run_migrations(db.pool()).await?;
    }

    let state = AppState::with_database(Arc::new(config), db.clone())?;
    let result = todo_api::serve(state).await;

    db.close().await;
    result
}
