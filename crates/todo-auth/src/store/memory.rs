//! In-memory user store using a Tokio read-write lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todo_core::error::AppError;
use todo_core::result::AppResult;
use todo_entity::user::{CreateUser, User};

use super::UserStore;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// Process-local user store.
///
/// Suitable for tests and single-node demo deployments only; contents are
/// lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.username == user.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                user.username
            )));
        }
        if inner.users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict("Email already in use"));
        }

        inner.next_id += 1;
        let stored = user.into_user(inner.next_id);
        inner.users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn update_phone(&self, id: i64, phone_number: &str) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.phone_number = phone_number.to_string();
        Ok(())
    }
}
