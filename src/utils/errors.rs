//! Application error handling
//!
//! All server-side errors and their conversion into HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Main application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// API error body
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidPayload(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Storage(e) => {
                error!("❌ Storage error: {}", e);
                ErrorResponse {
                    error: "Storage Error".to_string(),
                    message: "Ошибка базы данных, попробуйте позже".to_string(),
                    code: "STORAGE_ERROR",
                }
            }

            AppError::Validation(msg) => {
                warn!("⚠️ Validation error: {}", msg);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: msg,
                    code: "VALIDATION_ERROR",
                }
            }

            AppError::InvalidPayload(e) => {
                warn!("⚠️ Invalid payload: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: format!("Некорректные данные: {}", invalid_fields(&e)),
                    code: "VALIDATION_ERROR",
                }
            }

            AppError::NotFound(msg) => {
                warn!("🔍 Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    code: "NOT_FOUND",
                }
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    code: "BAD_REQUEST",
                }
            }

            AppError::Internal(msg) => {
                error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "Внутренняя ошибка сервера".to_string(),
                    code: "INTERNAL_ERROR",
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Undecodable request bodies get the same envelope as every other error
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("⚠️ Rejected request body: {}", rejection.body_text());
        AppError::BadRequest(MALFORMED_BODY_MESSAGE.to_string())
    }
}

pub const MALFORMED_BODY_MESSAGE: &str = "Некорректный формат данных запроса";

/// Sorted, comma-joined names of the fields that failed validation
fn invalid_fields(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();
    fields.join(", ")
}

/// Typed result for fallible operations
pub type AppResult<T> = Result<T, AppError>;

pub fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

pub fn not_found_error(resource: &str, id: i32) -> AppError {
    AppError::NotFound(format!("{} с id {} не найден(а)", resource, id))
}

pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
