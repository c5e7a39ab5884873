//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

use todo_auth::RegisterUser;
use todo_entity::user::UserRole;

/// Form-encoded login credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Registration body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Desired username.
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    /// Given name.
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    /// Password.
    pub password: String,
    /// Password, repeated.
    #[serde(default)]
    pub password_confirm: Option<String>,
    /// Initial active flag.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Requested role.
    #[validate(length(min = 1, max = 50))]
    pub role: String,
    /// Ten-digit phone number.
    #[validate(length(equal = 10))]
    pub phone_number: String,
}

fn default_true() -> bool {
    true
}

impl From<RegisterRequest> for RegisterUser {
    fn from(req: RegisterRequest) -> Self {
        RegisterUser {
            email: req.email,
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
            password_confirm: req.password_confirm,
            is_active: req.is_active,
            role: UserRole::new(req.role),
            phone_number: req.phone_number,
        }
    }
}
