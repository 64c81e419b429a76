//! Validation helpers
//!
//! Small checks shared by controllers that need field-specific messages
//! rather than the derive-based `validator` output.

use super::errors::{validation_error, AppResult};

/// Returns the trimmed value, or a validation error with `message` when the
/// field is absent or blank.
pub fn require_text<'a>(value: Option<&'a str>, message: &str) -> AppResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(validation_error(message)),
    }
}

/// Parses a numeric identifier coming from a query string or loose JSON.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// Accepts either a JSON number or a numeric string as an identifier.
pub fn id_from_json(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .filter(|id| *id > 0),
        serde_json::Value::String(s) => parse_id(s),
        _ => None,
    }
}
