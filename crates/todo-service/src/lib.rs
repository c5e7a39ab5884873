//! # todo-service
//!
//! Business logic service layer. Each service works on behalf of a resolved
//! [`Principal`](todo_auth::Principal) and reads through a store trait, so
//! the same code runs against PostgreSQL and the in-memory stores.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod store;
pub mod todo;
pub mod user;

pub use store::{MemoryTodoStore, TodoStore};
pub use todo::{AdminTodoService, TodoService};
pub use user::{ChangePasswordRequest, UserService};

use todo_core::error::AppError;
use validator::ValidationErrors;

/// Flattens `validator` errors into a single validation message.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
            format!("{field}: {}", codes.join(", "))
        })
        .collect();
    fields.sort();
    AppError::validation(format!("Invalid request: {}", fields.join("; ")))
}
