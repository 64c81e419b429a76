//! Payloads of the `/api/application-requests` resource

use serde::{Deserialize, Serialize};

use crate::models::ApplicationRequest;

/// Body of `POST /api/application-requests`.
///
/// Every field is optional at the wire level so the controller can answer
/// with a message naming the missing one.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub contact_method: Option<String>,
}

/// Body of `PATCH /api/application-requests`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub id: serde_json::Value,
    pub status: Option<String>,
}

/// Query of `DELETE /api/application-requests`
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequestQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestListResponse {
    pub requests: Vec<ApplicationRequest>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestResponse {
    pub success: bool,
    pub request: ApplicationRequest,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
