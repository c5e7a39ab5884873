//! Task storage.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use todo_core::result::AppResult;
use todo_entity::todo::{Todo, TodoInput};

pub use memory::MemoryTodoStore;

/// Persistence for tasks.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Every task, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Todo>>;

    /// Tasks owned by `user_id`, ordered by id.
    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Todo>>;

    /// A task by id regardless of owner.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Todo>>;

    /// A task by id, only when `user_id` owns it.
    async fn find_owned(&self, id: i64, user_id: i64) -> AppResult<Option<Todo>>;

    /// Persist a new task for `user_id`.
    async fn insert(&self, user_id: i64, input: &TodoInput) -> AppResult<Todo>;

    /// Overwrite a task's writable fields. `NotFound` when absent.
    async fn update(&self, id: i64, input: &TodoInput) -> AppResult<Todo>;

    /// Remove a task. Returns whether anything was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
