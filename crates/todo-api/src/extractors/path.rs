//! Typed path parameter helpers.

use todo_core::error::AppError;

/// Rejects non-positive resource ids before any lookup.
pub fn require_positive_id(id: i64) -> Result<i64, AppError> {
    if id <= 0 {
        return Err(AppError::validation(format!(
            "Id must be greater than 0, got {id}"
        )));
    }
    Ok(id)
}
