//! HTTP routes
//!
//! Each resource contributes a router with its full paths; `create_app`
//! merges them and adds the cross-cutting layers.

pub mod application_request_routes;
pub mod settings_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Full application router over `state`
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .merge(vehicle_routes::create_vehicle_router())
        .merge(application_request_routes::create_application_request_router())
        .merge(settings_routes::create_settings_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
