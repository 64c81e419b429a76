//! Catalog fetch contract
//!
//! The section fetches through `VehicleSource`, so the HTTP client can be
//! swapped for a fixture in tests.

use async_trait::async_trait;
use thiserror::Error;

use super::RawVehicle;

pub const LOAD_FAILED_MESSAGE: &str = "Ошибка при загрузке данных об автопарке";
pub const NO_DATA_MESSAGE: &str = "Нет данных об автопарке";
pub const SUBMIT_FAILED_MESSAGE: &str = "Не удалось создать заявку";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("response is not valid JSON: {0}")]
    Parse(String),

    #[error("response has no `{0}` field")]
    Shape(&'static str),

    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl FetchError {
    /// Inline message shown in place of the catalog
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Shape(_) => NO_DATA_MESSAGE.to_string(),
            FetchError::Rejected { message, .. } => message.clone(),
            FetchError::Network(_) | FetchError::Status(_) | FetchError::Parse(_) => {
                LOAD_FAILED_MESSAGE.to_string()
            }
        }
    }

    /// Message shown when the booking form could not be submitted
    pub fn submission_message(&self) -> String {
        match self {
            FetchError::Rejected { message, .. } => message.clone(),
            _ => SUBMIT_FAILED_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// One attempt, no retry
    async fn fetch_vehicles(&self) -> Result<Vec<RawVehicle>, FetchError>;
}
