//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod token;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use todo_core::config::{AppConfig, LoggingConfig};
use todo_core::error::AppError;
use todo_database::DatabasePool;

/// To-do service administration
#[derive(Debug, Parser)]
#[command(name = "todo-cli", version, about, long_about = None)]
pub struct Cli {
    /// Environment name; selects `config/{env}.toml` on top of `config/default.toml`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// User management
    User(user::UserArgs),
    /// Access token utilities
    Token(token::TokenArgs),
}

impl Cli {
    /// Logging settings for this invocation. `serve` follows the
    /// configuration; one-shot commands only report warnings.
    pub fn logging_config(&self, config: &AppConfig) -> LoggingConfig {
        match self.command {
            Commands::Serve(_) => config.logging.clone(),
            _ => LoggingConfig {
                level: "warn".to_string(),
                ..config.logging.clone()
            },
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
        }
    }
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
