//! Credential checking, token issuance, and account registration.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use todo_core::config::AuthConfig;
use todo_core::error::AppError;
use todo_entity::user::{CreateUser, User, UserRole};

use crate::error::AuthError;
use crate::jwt::{Claims, IssuedToken, JwtEncoder};
use crate::password::{PasswordHasher, PasswordValidator};
use crate::store::UserStore;

/// Plaintext used to build the hash verified when a username is unknown.
const DUMMY_PASSWORD: &str = "dummy-password-for-timing";

/// Registration request as accepted by [`Authenticator::register`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Plaintext password.
    pub password: String,
    /// Repeated password, checked only when confirmation is required.
    #[serde(default)]
    pub password_confirm: Option<String>,
    /// Initial active flag.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Requested role.
    #[serde(default = "UserRole::user")]
    pub role: UserRole,
    /// Ten-digit phone number.
    pub phone_number: String,
}

fn default_active() -> bool {
    true
}

/// Verifies credentials and issues access tokens.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    validator: PasswordValidator,
    require_confirmation: bool,
    dummy_hash: Arc<str>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("require_confirmation", &self.require_confirmation)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(
        config: &AuthConfig,
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash_password(DUMMY_PASSWORD)?;

        Ok(Self {
            store,
            hasher,
            encoder,
            validator: PasswordValidator::new(config),
            require_confirmation: config.require_password_confirmation,
            dummy_hash: dummy_hash.into(),
        })
    }

    /// Checks a username/password pair and issues a token on success.
    ///
    /// Unknown usernames and wrong passwords produce the same error, and
    /// both paths run one hash verification.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let user = self.store.find_by_username(username).await?;

        let user = match user {
            Some(user) if self.hasher.verify_password(password, &user.password_hash) => user,
            Some(_) => {
                warn!(username = %username, "Login failed: wrong password");
                return Err(AuthError::InvalidCredentials);
            }
            None => {
                self.hasher.verify_password(password, &self.dummy_hash);
                warn!(username = %username, "Login failed: unknown user");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let issued = self.encoder.issue(&Claims::for_user(&user), None)?;

        info!(
            user_id = user.id,
            username = %user.username,
            expires_at = %issued.expires_at,
            "Login successful"
        );

        Ok(issued)
    }

    /// Creates a new account from a registration request.
    pub async fn register(&self, request: RegisterUser) -> Result<User, AuthError> {
        if self.require_confirmation
            && request.password_confirm.as_deref() != Some(request.password.as_str())
        {
            return Err(AuthError::Validation(
                "Password and confirmation do not match".to_string(),
            ));
        }

        self.validator.validate(&request.password)?;
        let password_hash = self.hasher.hash_password(&request.password)?;

        let user = self
            .store
            .insert(CreateUser {
                email: request.email,
                username: request.username,
                first_name: request.first_name,
                last_name: request.last_name,
                password_hash,
                is_active: request.is_active,
                role: request.role,
                phone_number: request.phone_number,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, role = %user.role, "User registered");

        Ok(user)
    }
}
