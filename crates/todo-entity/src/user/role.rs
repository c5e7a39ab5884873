//! User role value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the built-in administrator role.
pub const ROLE_ADMIN: &str = "admin";
/// Name of the built-in default role.
pub const ROLE_USER: &str = "user";

/// A role name from an open set.
///
/// `"user"` and `"admin"` are the built-in roles; any other non-empty name
/// is stored as-is. Roles carry no hierarchy: two roles are the same role
/// only when their names are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserRole(String);

impl UserRole {
    /// Wraps an arbitrary role name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The administrator role.
    pub fn admin() -> Self {
        Self(ROLE_ADMIN.to_string())
    }

    /// The default role.
    pub fn user() -> Self {
        Self(ROLE_USER.to_string())
    }

    /// Return the role name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for UserRole {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UserRole {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
