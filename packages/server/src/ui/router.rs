//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{handler, state::AppState};

/// Build the application router around `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handler::root))
        .route("/api/health", get(handler::health_check))
        .route("/users", post(handler::create_user).get(handler::get_users))
        .route(
            "/users/{id}",
            get(handler::get_user).delete(handler::delete_user),
        )
        .route(
            "/appointments",
            post(handler::create_appointment).get(handler::get_appointments),
        )
        .fallback(handler::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
