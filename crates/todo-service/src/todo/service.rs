//! Owner-scoped task operations.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use todo_auth::Principal;
use todo_core::error::AppError;
use todo_entity::todo::{Todo, TodoInput};

use crate::store::TodoStore;
use crate::validation_error;

/// Task operations restricted to the caller's own tasks.
///
/// A task owned by someone else is reported exactly like a missing one.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    /// Creates a new task service.
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Lists the caller's tasks.
    pub async fn list(&self, principal: &Principal) -> Result<Vec<Todo>, AppError> {
        self.store.find_by_owner(principal.user_id).await
    }

    /// Fetches one of the caller's tasks.
    pub async fn get(&self, principal: &Principal, todo_id: i64) -> Result<Todo, AppError> {
        self.store
            .find_owned(todo_id, principal.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Todo not found"))
    }

    /// Creates a task owned by the caller.
    pub async fn create(&self, principal: &Principal, input: TodoInput) -> Result<Todo, AppError> {
        input.validate().map_err(validation_error)?;

        let todo = self.store.insert(principal.user_id, &input).await?;
        info!(user_id = principal.user_id, todo_id = todo.id, "Todo created");
        Ok(todo)
    }

    /// Replaces every writable field of one of the caller's tasks.
    pub async fn update(
        &self,
        principal: &Principal,
        todo_id: i64,
        input: TodoInput,
    ) -> Result<Todo, AppError> {
        input.validate().map_err(validation_error)?;
        self.get(principal, todo_id).await?;

        let todo = self.store.update(todo_id, &input).await?;
        info!(user_id = principal.user_id, todo_id, "Todo updated");
        Ok(todo)
    }

    /// Deletes one of the caller's tasks.
    pub async fn delete(&self, principal: &Principal, todo_id: i64) -> Result<(), AppError> {
        self.get(principal, todo_id).await?;

        if !self.store.delete(todo_id).await? {
            return Err(AppError::not_found("Todo not found"));
        }
        info!(user_id = principal.user_id, todo_id, "Todo deleted");
        Ok(())
    }
}
