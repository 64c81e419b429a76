use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::controllers::settings_controller::SettingsController;
use crate::dto::settings_dto::{SettingsResponse, UpdateSettingsRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new().route("/api/settings", get(get_settings).put(update_settings))
}

async fn get_settings(State(state): State<AppState>) -> Result<Json<SettingsResponse>, AppError> {
    let controller = SettingsController::new(state.settings.clone());
    let settings = controller.get().await?;
    Ok(Json(SettingsResponse { settings }))
}

async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> Result<Json<SettingsResponse>, AppError> {
    let Json(request) = payload?;
    let controller = SettingsController::new(state.settings.clone());
    let settings = controller.update(request).await?;
    Ok(Json(SettingsResponse { settings }))
}
