//! [`UserStore`] backed by PostgreSQL.

use async_trait::async_trait;

use todo_core::result::AppResult;
use todo_database::repositories::UserRepository;
use todo_entity::user::{CreateUser, User};

use super::UserStore;

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_username(self, username).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        self.create(&user).await
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> AppResult<()> {
        self.update_password(id, password_hash).await
    }

    async fn update_phone(&self, id: i64, phone_number: &str) -> AppResult<()> {
        UserRepository::update_phone(self, id, phone_number).await
    }
}
