//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{HealthResponse, MessageResponse};
use crate::state::AppState;

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "ok".to_string(),
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match &state.db {
        Some(db) => Some(match db.health_check().await {
            Ok(true) => "connected".to_string(),
            _ => "unreachable".to_string(),
        }),
        None => None,
    };

    let status = match database.as_deref() {
        Some("unreachable") => "degraded",
        _ => "ok",
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
