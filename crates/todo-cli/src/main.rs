//! Command-line entry point for the to-do service.

use clap::Parser;

use todo_api::telemetry::{init_tracing, warn_insecure_settings};
use todo_core::config::AppConfig;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.env)?;

    init_tracing(&cli.logging_config(&config));
    warn_insecure_settings(&config);

    cli.execute(config).await?;
    Ok(())
}
