//! Request and response payloads of the HTTP API

pub mod application_request_dto;
pub mod settings_dto;
pub mod vehicle_dto;

use serde::{Deserialize, Deserializer};

/// For partial updates of clearable text: absent stays `None` (keep), while
/// `null` or a blank string becomes `Some(None)` (clear). Pair with
/// `#[serde(default)]`.
pub(crate) fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(Some(value.filter(|text| !text.trim().is_empty())))
}
