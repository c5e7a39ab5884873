//! Response DTOs.

use serde::{Deserialize, Serialize};

use todo_entity::user::User;

/// `{"message": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// `{"status": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Status text.
    pub status: String,
}

impl StatusResponse {
    /// Wraps a status message.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
}

/// Account details exposed to their owner. Never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoResponse {
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Active flag.
    pub is_active: bool,
    /// Role name.
    pub role: String,
    /// Phone number.
    pub phone_number: String,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
            role: user.role.to_string(),
            phone_number: user.phone_number,
        }
    }
}

/// `{"user": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    /// The account.
    pub user: UserInfoResponse,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database reachability, absent when no database is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}
