//! Start the HTTP server.

use std::sync::Arc;

use clap::Args;

use todo_api::AppState;
use todo_core::config::AppConfig;
use todo_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Use process-local stores instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    let config = Arc::new(config);

    let state = if args.in_memory {
        tracing::warn!("Using in-memory stores; data is lost on exit");
        AppState::in_memory(config)?
    } else {
        let db = super::connect(&config).await?;
        if config.database.run_migrations {
            todo_database::migration::run_migrations(db.pool()).await?;
        }
        AppState::with_database(config, db)?
    };

    todo_api::serve(state).await
}
