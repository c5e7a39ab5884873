//! # todo-api
//!
//! HTTP API layer built on Axum.
//!
//! Provides the REST endpoints, the bearer-token extractor, request
//! logging and CORS middleware, DTOs, and the mapping from domain errors to
//! HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod telemetry;

pub use app::{build_app, serve};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
