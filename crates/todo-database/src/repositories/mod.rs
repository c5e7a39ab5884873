//! Repository implementations for the service's tables.

pub mod todo;
pub mod user;

pub use todo::TodoRepository;
pub use user::UserRepository;
