use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;

/// Body of `POST /api/vehicles`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub class: String,

    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2100))]
    pub year: i32,

    #[validate(range(min = 1, max = 60))]
    pub seats: i32,

    pub description: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub amenities: Option<String>,

    pub is_active: Option<bool>,
}

/// Body of `PUT /api/vehicles/:id`. Absent fields are kept; `null` or `""`
/// clears `description`, `imageUrl` and `amenities`, so the class defaults
/// apply again.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub class: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(min = 1, max = 60))]
    pub seats: Option<i32>,

    #[serde(default, deserialize_with = "crate::dto::nullable")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::nullable")]
    #[validate(url)]
    pub image_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::nullable")]
    pub amenities: Option<Option<String>>,

    pub is_active: Option<bool>,
}

/// Body of `GET /api/vehicles`
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub success: bool,
    pub vehicle: Vehicle,
}
