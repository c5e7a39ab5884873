//! User self-service handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use todo_service::ChangePasswordRequest;

use crate::dto::response::UserEnvelope;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /users
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserEnvelope>> {
    let user = state.user_service.profile(&auth).await?;
    Ok(Json(UserEnvelope { user: user.into() }))
}

/// PUT /users/password-change
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<StatusCode> {
    state.user_service.change_password(&auth, req).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /users/phone-number/{new_phone_number}
pub async fn change_phone_number(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(new_phone_number): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .user_service
        .change_phone(&auth, &new_phone_number)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
