use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleListResponse, VehicleResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/api/vehicles", get(list_vehicles).post(create_vehicle))
        .route(
            "/api/vehicles/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let vehicles = controller.list().await?;
    Ok(Json(VehicleListResponse { vehicles }))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let vehicle = controller.get_by_id(id).await?;
    Ok(Json(VehicleResponse { success: true, vehicle }))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    let Json(request) = payload?;
    let controller = VehicleController::new(state.vehicles.clone());
    let vehicle = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(VehicleResponse { success: true, vehicle })))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateVehicleRequest>, JsonRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let Json(request) = payload?;
    let controller = VehicleController::new(state.vehicles.clone());
    let vehicle = controller.update(id, request).await?;
    Ok(Json(VehicleResponse { success: true, vehicle }))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    controller.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}
