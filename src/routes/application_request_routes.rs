use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::application_request_controller::ApplicationRequestController;
use crate::dto::application_request_dto::{
    CreateApplicationRequest, DeleteRequestQuery, RequestListResponse, RequestResponse,
    SuccessResponse, UpdateStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_application_request_router() -> Router<AppState> {
    Router::new().route(
        "/api/application-requests",
        get(list_requests)
            .post(create_request)
            .patch(update_request_status)
            .delete(delete_request),
    )
}

async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<RequestListResponse>, AppError> {
    let controller = ApplicationRequestController::new(state.application_requests.clone());
    let requests = controller.list().await?;
    Ok(Json(RequestListResponse { requests }))
}

async fn create_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateApplicationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RequestResponse>), AppError> {
    let Json(request) = payload?;
    let controller = ApplicationRequestController::new(state.application_requests.clone());
    let request = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(RequestResponse { success: true, request })))
}

async fn update_request_status(
    State(state): State<AppState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<RequestResponse>, AppError> {
    let Json(request) = payload?;
    let controller = ApplicationRequestController::new(state.application_requests.clone());
    let request = controller.update_status(request).await?;
    Ok(Json(RequestResponse { success: true, request }))
}

async fn delete_request(
    State(state): State<AppState>,
    Query(query): Query<DeleteRequestQuery>,
) -> Result<Json<SuccessResponse>, AppError> {
    let controller = ApplicationRequestController::new(state.application_requests.clone());
    controller.delete(query.id.as_deref()).await?;
    Ok(Json(SuccessResponse { success: true }))
}
