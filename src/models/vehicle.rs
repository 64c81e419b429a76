//! Vehicle model
//!
//! One row of the `vehicles` table. The same shape is what the catalog
//! receives from `GET /api/vehicles`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    /// Coarse tier label, e.g. "Business"; also the key for display defaults
    pub class: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub seats: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Semicolon-joined amenity list
    pub amenities: Option<String>,
    pub is_active: bool,
}
