//! Caller identity for a single request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use todo_entity::user::UserRole;

use crate::error::AuthError;
use crate::jwt::{Claims, JwtDecoder};
use crate::rbac;

/// The authenticated caller, as asserted by a valid token.
///
/// This is a snapshot taken at token issuance. A role change or account
/// deactivation after issuance is not reflected until the token expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Username (the token subject).
    pub username: String,
    /// Numeric user id.
    pub user_id: i64,
    /// Role at issuance.
    pub role: UserRole,
}

impl Principal {
    /// Fails with `Forbidden` unless the role is exactly `expected`.
    pub fn require_role(&self, expected: &str) -> Result<(), AuthError> {
        rbac::require_role(self, expected)
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

/// Turns a presented bearer token into a [`Principal`].
#[derive(Debug, Clone)]
pub struct PrincipalResolver {
    decoder: Arc<JwtDecoder>,
}

impl PrincipalResolver {
    /// Creates a resolver over the given decoder.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self { decoder }
    }

    /// Resolves a token. Every failure surfaces as `Unauthorized`.
    pub fn resolve(&self, token: &str) -> Result<Principal, AuthError> {
        match self.decoder.decode(token) {
            Ok(claims) => Ok(claims.into()),
            Err(reason) => {
                debug!(reason = %reason, "Rejected bearer token");
                Err(AuthError::Unauthorized)
            }
        }
    }

    /// Resolves an optional token; absence is `Unauthorized`.
    pub fn resolve_bearer(&self, token: Option<&str>) -> Result<Principal, AuthError> {
        match token {
            Some(token) if !token.is_empty() => self.resolve(token),
            _ => Err(AuthError::Unauthorized),
        }
    }
}
