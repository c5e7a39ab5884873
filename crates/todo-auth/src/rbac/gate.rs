//! Exact-match role gate.

use todo_entity::user::role::ROLE_ADMIN;
use tracing::debug;

use crate::error::AuthError;
use crate::principal::Principal;

/// Fails with `Forbidden` unless the principal's role equals `expected`.
///
/// There is no hierarchy: an administrator does not pass a `"user"` gate.
pub fn require_role(principal: &Principal, expected: &str) -> Result<(), AuthError> {
    if principal.role == expected {
        return Ok(());
    }

    debug!(
        user_id = principal.user_id,
        role = %principal.role,
        required = expected,
        "Role gate denied access"
    );
    Err(AuthError::Forbidden)
}

/// Shorthand for `require_role(principal, "admin")`.
pub fn require_admin(principal: &Principal) -> Result<(), AuthError> {
    require_role(principal, ROLE_ADMIN)
}
