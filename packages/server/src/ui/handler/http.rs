//! Service-level endpoints.

use axum::Json;

use crate::{infrastructure::dto::http::MessageDto, ui::error::ApiError};

/// Landing endpoint
pub async fn root() -> Json<MessageDto> {
    Json(MessageDto {
        message: "Welcome to the Agenda server!".to_string(),
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Fallback for unknown paths and methods
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
