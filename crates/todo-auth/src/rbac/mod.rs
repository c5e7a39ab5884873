//! Role-based access control.

pub mod gate;

pub use gate::{require_admin, require_role};
