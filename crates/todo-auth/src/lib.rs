//! # todo-auth
//!
//! Authentication and authorization for the to-do service.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and new-password policy
//! - `jwt`: signed, time-bound access tokens (HS256)
//! - `authenticator`: credential checking, token issuance, registration
//! - `principal`: per-request caller identity resolved from a token
//! - `rbac`: exact-match role gate
//! - `store`: the user-record collaborator the core reads through

pub mod authenticator;
pub mod error;
pub mod jwt;
pub mod password;
pub mod principal;
pub mod rbac;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use authenticator::{Authenticator, RegisterUser};
pub use error::AuthError;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use principal::{Principal, PrincipalResolver};
pub use rbac::require_role;
pub use store::{MemoryUserStore, UserStore};
