//! Owner-scoped task handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use todo_entity::todo::{Todo, TodoInput};

use crate::dto::response::StatusResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, require_positive_id};
use crate::state::AppState;

/// GET /todos
pub async fn list_todos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(state.todo_service.list(&auth).await?))
}

/// GET /todos/{todo_id}
pub async fn get_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<i64>,
) -> ApiResult<Json<Todo>> {
    let todo_id = require_positive_id(todo_id)?;
    Ok(Json(state.todo_service.get(&auth, todo_id).await?))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<TodoInput>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    state.todo_service.create(&auth, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new("The new todo was created")),
    ))
}

/// PUT /todos/{todo_id}
pub async fn update_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<i64>,
    Json(input): Json<TodoInput>,
) -> ApiResult<StatusCode> {
    let todo_id = require_positive_id(todo_id)?;
    state.todo_service.update(&auth, todo_id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todos/{todo_id}
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let todo_id = require_positive_id(todo_id)?;
    state.todo_service.delete(&auth, todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
