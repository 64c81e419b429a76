//! Application request model
//!
//! Intake record left by a prospective customer through the booking form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status every new request starts with
pub const STATUS_NEW: &str = "new";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub contact_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields of a new request
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplicationRequest {
    pub name: String,
    pub phone: String,
    pub contact_method: String,
}
