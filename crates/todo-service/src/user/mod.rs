//! Account self-service.

pub mod service;

pub use service::{ChangePasswordRequest, UserService};
