//! # todo-core
//!
//! Core crate for the to-do service. Contains the configuration schema
//! and the unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
