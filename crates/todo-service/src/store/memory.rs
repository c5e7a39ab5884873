//! In-memory task store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todo_core::error::AppError;
use todo_core::result::AppResult;
use todo_entity::todo::{Todo, TodoInput};

use super::TodoStore;

#[derive(Debug, Default)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// Process-local task store for tests and `serve --in-memory`.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryTodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        Ok(self.inner.read().await.todos.values().cloned().collect())
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner
            .todos
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Todo>> {
        Ok(self.inner.read().await.todos.get(&id).cloned())
    }

    async fn find_owned(&self, id: i64, user_id: i64) -> AppResult<Option<Todo>> {
        let inner = self.inner.read().await;
        Ok(inner.todos.get(&id).filter(|t| t.user_id == user_id).cloned())
    }

    async fn insert(&self, user_id: i64, input: &TodoInput) -> AppResult<Todo> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let todo = input.clone().into_todo(inner.next_id, user_id);
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, input: &TodoInput) -> AppResult<Todo> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .todos
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Todo not found"))?;
        *existing = input.clone().into_todo(id, existing.user_id);
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.inner.write().await.todos.remove(&id).is_some())
    }
}
