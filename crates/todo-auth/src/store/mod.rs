//! User record storage as seen by the authentication core.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use todo_core::result::AppResult;
use todo_entity::user::{CreateUser, User};

pub use memory::MemoryUserStore;

/// Lookup and narrow mutation of user records.
///
/// Implementations report duplicate usernames or emails on
/// [`insert`](Self::insert) as `ErrorKind::Conflict` and leave the existing
/// record untouched.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Persist a new user and return it with its assigned id.
    async fn insert(&self, user: CreateUser) -> AppResult<User>;

    /// Replace the stored password hash.
    async fn update_password_hash(&self, id: i64, password_hash: &str) -> AppResult<()>;

    /// Replace the stored phone number.
    async fn update_phone(&self, id: i64, phone_number: &str) -> AppResult<()>;
}
