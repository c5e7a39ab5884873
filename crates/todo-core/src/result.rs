//! Convenience result type alias.

use crate::error::AppError;

/// A specialized `Result` type for service operations.
///
/// Saves every crate from spelling out `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
