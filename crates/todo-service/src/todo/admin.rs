//! Administrator task access across all owners.

use std::sync::Arc;

use tracing::info;

use todo_auth::Principal;
use todo_auth::rbac::require_admin;
use todo_core::error::AppError;
use todo_entity::todo::Todo;

use crate::store::TodoStore;

/// Task operations that ignore ownership and require the admin role.
#[derive(Clone)]
pub struct AdminTodoService {
    store: Arc<dyn TodoStore>,
}

impl AdminTodoService {
    /// Creates a new admin task service.
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Lists every task in the system.
    pub async fn list_all(&self, principal: &Principal) -> Result<Vec<Todo>, AppError> {
        require_admin(principal)?;
        self.store.find_all().await
    }

    /// Fetches any task by id.
    pub async fn get(&self, principal: &Principal, todo_id: i64) -> Result<Todo, AppError> {
        require_admin(principal)?;
        self.store
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| AppError::not_found("Todo not found"))
    }

    /// Deletes any task by id.
    pub async fn delete(&self, principal: &Principal, todo_id: i64) -> Result<(), AppError> {
        require_admin(principal)?;

        if !self.store.delete(todo_id).await? {
            return Err(AppError::not_found("Todo not found"));
        }

        info!(admin_id = principal.user_id, todo_id, "Admin deleted todo");
        Ok(())
    }
}
