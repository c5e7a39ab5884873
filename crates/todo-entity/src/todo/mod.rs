//! To-do task entities.

pub mod model;

pub use model::{Todo, TodoInput};
