//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique, store-assigned identifier.
    pub id: i64,
    /// Unique email address.
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Argon2 password hash (PHC string).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// User role (RBAC).
    pub role: UserRole,
    /// Ten-digit phone number.
    pub phone_number: String,
}

/// Data required to insert a new user. The password is already hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Pre-hashed password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Initial active flag.
    pub is_active: bool,
    /// Assigned role.
    pub role: UserRole,
    /// Ten-digit phone number.
    pub phone_number: String,
}

impl CreateUser {
    /// Materializes the row the store will hold once an id is assigned.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash: self.password_hash,
            is_active: self.is_active,
            role: self.role,
            phone_number: self.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = CreateUser {
            email: "john.doe@example.com".to_string(),
            username: "johndoe123".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            is_active: true,
            role: UserRole::user(),
            phone_number: "0123456789".to_string(),
        }
        .into_user(1);

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "johndoe123");
        assert_eq!(json["role"], "user");
    }
}
