//! Shared fixtures for unit tests.

use std::sync::Arc;

use todo_core::config::AuthConfig;
use todo_entity::user::{CreateUser, UserRole};

use crate::password::PasswordHasher;
use crate::store::{MemoryUserStore, UserStore};

pub(crate) const TEST_SECRET: &str = "unit-test-secret-with-enough-bytes";

/// Auth config with a cheap Argon2 work factor.
pub(crate) fn fast_config() -> AuthConfig {
    let mut config = AuthConfig::default();
    config.jwt_secret = TEST_SECRET.to_string();
    config.argon2.memory_kib = 256;
    config.argon2.iterations = 1;
    config.argon2.parallelism = 1;
    config
}

pub(crate) fn new_user(username: &str, password_hash: String, role: UserRole) -> CreateUser {
    CreateUser {
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password_hash,
        is_active: true,
        role,
        phone_number: "1111111111".to_string(),
    }
}

/// A memory store holding `jane` (user) and `root` (admin), both with
/// password `12345aA@`.
pub(crate) async fn seeded_store(hasher: &PasswordHasher) -> Arc<MemoryUserStore> {
    let store = Arc::new(MemoryUserStore::new());
    for (name, role) in [("jane", UserRole::user()), ("root", UserRole::admin())] {
        let hash = hasher.hash_password("12345aA@").unwrap();
        store.insert(new_user(name, hash, role)).await.unwrap();
    }
    store
}
