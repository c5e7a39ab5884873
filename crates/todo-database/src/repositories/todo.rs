//! Task repository implementation.

use sqlx::PgPool;

use todo_core::error::{AppError, ErrorKind};
use todo_core::result::AppResult;
use todo_entity::todo::{Todo, TodoInput};

const TODO_COLUMNS: &str = "id, user_id, title, description, priority, completed";

/// Repository for task rows.
#[derive(Debug, Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every task in the system.
    pub async fn find_all(&self) -> AppResult<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(&format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list todos", e))
    }

    /// List the tasks owned by one user.
    pub async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user todos", e))
    }

    /// Find a task by primary key regardless of owner.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find todo", e))
    }

    /// Find a task only if it belongs to `user_id`.
    pub async fn find_owned(&self, id: i64, user_id: i64) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find todo", e))
    }

    /// Insert a task for the given owner.
    pub async fn create(&self, user_id: i64, data: &TodoInput) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (user_id, title, description, priority, completed) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {TODO_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority)
        .bind(data.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create todo", e))
    }

    /// Overwrite every writable field of a task.
    pub async fn update(&self, id: i64, data: &TodoInput) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos SET title = $2, description = $3, priority = $4, completed = $5 \
             WHERE id = $1 RETURNING {TODO_COLUMNS}"
        ))
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority)
        .bind(data.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update todo", e))?
        .ok_or_else(|| AppError::not_found("Todo not found"))
    }

    /// Delete a task by primary key. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;

        Ok(result.rows_affected() > 0)
    }
}
