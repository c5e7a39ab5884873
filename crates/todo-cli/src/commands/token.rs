//! Access token utilities.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use todo_auth::{JwtDecoder, Principal};
use todo_core::config::AppConfig;
use todo_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Verify a token with the configured secret and show its principal
    Inspect {
        /// The compact token string
        token: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct PrincipalRow {
    username: String,
    user_id: i64,
    role: String,
}

impl From<Principal> for PrincipalRow {
    fn from(p: Principal) -> Self {
        Self {
            username: p.username,
            user_id: p.user_id,
            role: p.role.to_string(),
        }
    }
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Inspect { token } => {
            let claims = JwtDecoder::new(&config.auth).decode(token).map_err(|reason| {
                output::print_error(&format!("Token rejected: {reason}"));
                AppError::unauthorized(reason.to_string())
            })?;

            let principal = Principal::from(claims);
            output::print_list(&[PrincipalRow::from(principal)], format);
        }
    }
    Ok(())
}
