//! Admin task handlers. Role checks happen in `AdminTodoService`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use todo_entity::todo::Todo;

use crate::error::ApiResult;
use crate::extractors::{AuthUser, require_positive_id};
use crate::state::AppState;

/// GET /todos/admin
pub async fn list_all_todos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(state.admin_todo_service.list_all(&auth).await?))
}

/// GET /todos/admin/{todo_id}
pub async fn get_any_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<i64>,
) -> ApiResult<Json<Todo>> {
    let todo_id = require_positive_id(todo_id)?;
    Ok(Json(state.admin_todo_service.get(&auth, todo_id).await?))
}

/// DELETE /todos/admin/{todo_id}
pub async fn delete_any_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let todo_id = require_positive_id(todo_id)?;
    state.admin_todo_service.delete(&auth, todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
