//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use dialoguer::{Input, Password, Select};
use serde::Serialize;
use tabled::Tabled;

use todo_auth::{Authenticator, JwtEncoder, PasswordHasher, RegisterUser};
use todo_core::config::AppConfig;
use todo_core::error::AppError;
use todo_database::repositories::UserRepository;
use todo_entity::user::{User, UserRole};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
    /// Create a user interactively
    Create {
        /// Create the account with the admin role without asking
        #[arg(long)]
        admin: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    role: String,
    active: bool,
    phone_number: String,
}

impl From<User> for UserRow {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            role: u.role.to_string(),
            active: u.is_active,
            phone_number: u.phone_number,
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = user_repo
                .find_all()
                .await?
                .into_iter()
                .map(UserRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        UserCommand::Create { admin } => {
            let request = prompt_registration(*admin)?;

            let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
            let authenticator = Authenticator::new(
                &config.auth,
                user_repo,
                hasher,
                Arc::new(JwtEncoder::new(&config.auth)),
            )?;

            let user = authenticator.register(request).await?;
            output::print_success(&format!(
                "User '{}' created with id {} (role: {})",
                user.username, user.id, user.role
            ));
        }
    }

    db.close().await;
    Ok(())
}

fn prompt_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Prompt failed: {e}"))
}

fn prompt_registration(admin: bool) -> Result<RegisterUser, AppError> {
    let username: String = Input::new()
        .with_prompt("Username")
        .interact_text()
        .map_err(prompt_error)?;
    let email: String = Input::new()
        .with_prompt("Email")
        .validate_with(|v: &String| {
            if v.contains('@') {
                Ok(())
            } else {
                Err("not an email address")
            }
        })
        .interact_text()
        .map_err(prompt_error)?;
    let first_name: String = Input::new()
        .with_prompt("First name")
        .interact_text()
        .map_err(prompt_error)?;
    let last_name: String = Input::new()
        .with_prompt("Last name")
        .interact_text()
        .map_err(prompt_error)?;
    let phone_number: String = Input::new()
        .with_prompt("Phone number (10 digits)")
        .validate_with(|v: &String| {
            if v.chars().count() == 10 {
                Ok(())
            } else {
                Err("must be exactly 10 characters")
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    let role = if admin {
        UserRole::admin()
    } else {
        let roles = [UserRole::user(), UserRole::admin()];
        let choice = Select::new()
            .with_prompt("Role")
            .items(&roles)
            .default(0)
            .interact()
            .map_err(prompt_error)?;
        roles[choice].clone()
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(prompt_error)?;

    Ok(RegisterUser {
        email,
        username,
        first_name,
        last_name,
        password_confirm: Some(password.clone()),
        password,
        is_active: true,
        role,
        phone_number,
    })
}
