//! # todo-entity
//!
//! Domain entity models for the to-do service. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod todo;
pub mod user;

pub use todo::{Todo, TodoInput};
pub use user::{CreateUser, User, UserRole};
