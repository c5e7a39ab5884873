//! Route definitions for the HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with every route and the request logger.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(todo_routes())
        .merge(admin_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
}

/// Login and registration
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::get_profile))
        .route("/users/password-change", put(handlers::user::change_password))
        .route(
            "/users/phone-number/{new_phone_number}",
            put(handlers::user::change_phone_number),
        )
}

/// Owner-scoped task CRUD
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todos/{todo_id}",
            get(handlers::todo::get_todo)
                .put(handlers::todo::update_todo)
                .delete(handlers::todo::delete_todo),
        )
}

/// Admin task access
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/todos/admin", get(handlers::admin::list_all_todos))
        .route(
            "/todos/admin/{todo_id}",
            get(handlers::admin::get_any_todo).delete(handlers::admin::delete_any_todo),
        )
}
