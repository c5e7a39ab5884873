//! [`TodoStore`] backed by PostgreSQL.

use async_trait::async_trait;

use todo_core::result::AppResult;
use todo_database::repositories::TodoRepository;
use todo_entity::todo::{Todo, TodoInput};

use super::TodoStore;

#[async_trait]
impl TodoStore for TodoRepository {
    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        TodoRepository::find_all(self).await
    }

    async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Todo>> {
        TodoRepository::find_by_owner(self, user_id).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Todo>> {
        TodoRepository::find_by_id(self, id).await
    }

    async fn find_owned(&self, id: i64, user_id: i64) -> AppResult<Option<Todo>> {
        TodoRepository::find_owned(self, id, user_id).await
    }

    async fn insert(&self, user_id: i64, input: &TodoInput) -> AppResult<Todo> {
        self.create(user_id, input).await
    }

    async fn update(&self, id: i64, input: &TodoInput) -> AppResult<Todo> {
        TodoRepository::update(self, id, input).await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        TodoRepository::delete(self, id).await
    }
}
