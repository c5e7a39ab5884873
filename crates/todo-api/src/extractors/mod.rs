//! Custom Axum extractors.

pub mod auth;
pub mod path;

pub use auth::{ACCESS_TOKEN_COOKIE, AuthUser};
pub use path::require_positive_id;
