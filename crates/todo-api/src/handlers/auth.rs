//! Auth handlers: login and registration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use validator::Validate;

use todo_service::validation_error;

use crate::dto::request::{LoginForm, RegisterRequest};
use crate::dto::response::{LoginResponse, StatusResponse};
use crate::error::ApiResult;
use crate::extractors::ACCESS_TOKEN_COOKIE;
use crate::state::AppState;

/// POST /auth/login
///
/// Returns the token in the body and also sets it as an HTTP-only cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let issued = state
        .authenticator
        .login(&form.username, &form.password)
        .await?;

    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, issued.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            access_token: issued.access_token,
        }),
    ))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    req.validate().map_err(validation_error)?;

    state.authenticator.register(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new("New account was created")),
    ))
}
