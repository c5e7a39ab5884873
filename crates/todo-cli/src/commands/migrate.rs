//! Database migration command.

use todo_core::config::AppConfig;
use todo_core::error::AppError;

use crate::output;

/// Run all pending migrations.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let db = super::connect(config).await?;

    println!("Running database migrations...");
    todo_database::migration::run_migrations(db.pool()).await?;
    output::print_success("All migrations applied successfully.");

    db.close().await;
    Ok(())
}
