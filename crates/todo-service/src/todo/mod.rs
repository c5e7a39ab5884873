//! Task services.

pub mod admin;
pub mod service;

pub use admin::AdminTodoService;
pub use service::TodoService;
