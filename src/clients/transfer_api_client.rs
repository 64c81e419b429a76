//! Client for the public site API
//!
//! Used by the catalog to load vehicles and by the booking form to submit
//! application requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{FetchError, RawVehicle, VehicleSource};
use crate::dto::application_request_dto::CreateApplicationRequest;
use crate::models::{ApplicationRequest, SiteSettings};

#[derive(Clone)]
pub struct TransferApiClient {
    client: Client,
    base_url: String,
}

impl TransferApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and return the JSON body of a 2xx response
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url(path);
        debug!("🌐 GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            warn!("⚠️ GET {} answered {}", url, response.status());
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    pub async fn fetch_settings(&self) -> Result<SiteSettings, FetchError> {
        let mut body = self.get_json("/api/settings").await?;
        let settings = body.get_mut("settings").map(Value::take).ok_or(FetchError::Shape("settings"))?;
        serde_json::from_value(settings).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Submits the booking form. Validation failures come back as
    /// `FetchError::Rejected` carrying the server's message; show errors with
    /// `FetchError::submission_message`.
    pub async fn submit_application_request(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<ApplicationRequest, FetchError> {
        let url = self.url("/api/application-requests");
        debug!("🌐 POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            warn!("⚠️ POST {} answered {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Некорректные данные заявки")
                .to_string();
            return Err(FetchError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created = body.get_mut("request").map(Value::take).ok_or(FetchError::Shape("request"))?;
        serde_json::from_value(created).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl VehicleSource for TransferApiClient {
    async fn fetch_vehicles(&self) -> Result<Vec<RawVehicle>, FetchError> {
        let mut body = self.get_json("/api/vehicles").await?;

        let vehicles = match body.get_mut("vehicles") {
            Some(list @ Value::Array(_)) => list.take(),
            _ => return Err(FetchError::Shape("vehicles")),
        };

        serde_json::from_value(vehicles).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
