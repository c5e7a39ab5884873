//! Error taxonomy for authentication and authorization.

use thiserror::Error;

use todo_core::error::{AppError, ErrorKind};

/// Message returned for every token-related rejection. Expired and malformed
/// tokens are indistinguishable to the caller.
pub const INVALID_AUTH_MESSAGE: &str = "Could not validate credentials";

/// Failures raised by the authentication core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately does not say which.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Token is malformed, carries a bad signature, or lacks required claims.
    #[error("Invalid token")]
    InvalidToken,

    /// Token signature is valid but its expiry has passed.
    #[error("Token has expired")]
    Expired,

    /// No usable credential accompanied the request.
    #[error("Could not validate credentials")]
    Unauthorized,

    /// The caller is authenticated but holds the wrong role.
    #[error("You are not allowed to perform this action")]
    Forbidden,

    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),

    /// Input failed a policy check.
    #[error("{0}")]
    Validation(String),

    /// The password hashing engine failed.
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Token signing failed.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The user store failed for a reason other than a conflict.
    #[error(transparent)]
    Store(AppError),
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind {
            ErrorKind::Conflict => Self::Conflict(err.message),
            ErrorKind::Validation => Self::Validation(err.message),
            _ => Self::Store(err),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::unauthorized(err.to_string()),
            AuthError::InvalidToken | AuthError::Expired | AuthError::Unauthorized => {
                AppError::unauthorized(INVALID_AUTH_MESSAGE)
            }
            AuthError::Forbidden => AppError::forbidden(err.to_string()),
            AuthError::Conflict(message) => AppError::conflict(message),
            AuthError::Validation(message) => AppError::validation(message),
            AuthError::Hashing(_) | AuthError::Internal(_) => AppError::internal(err.to_string()),
            AuthError::Store(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_collapse_to_unauthorized() {
        for err in [AuthError::InvalidToken, AuthError::Expired, AuthError::Unauthorized] {
            let app: AppError = err.into();
            assert_eq!(app.kind, ErrorKind::Unauthorized);
            assert_eq!(app.message, INVALID_AUTH_MESSAGE);
        }
    }

    #[test]
    fn test_conflict_round_trips_through_app_error() {
        let auth: AuthError = AppError::conflict("Username 'jane' already exists").into();
        assert!(matches!(auth, AuthError::Conflict(ref m) if m.contains("jane")));

        let app: AppError = auth.into();
        assert_eq!(app.kind, ErrorKind::Conflict);
    }

    #[test]
    fn test_store_errors_keep_their_kind() {
        let auth: AuthError = AppError::database("connection refused").into();
        let app: AppError = auth.into();
        assert_eq!(app.kind, ErrorKind::Database);
    }

    #[test]
    fn test_forbidden_maps_to_forbidden() {
        let app: AppError = AuthError::Forbidden.into();
        assert_eq!(app.kind, ErrorKind::Forbidden);
    }
}
