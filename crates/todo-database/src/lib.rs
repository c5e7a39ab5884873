//! # todo-database
//!
//! PostgreSQL connection management, embedded migrations, and concrete
//! repositories for users and tasks.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{TodoRepository, UserRepository};
