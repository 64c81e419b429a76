//! Intake of booking-form submissions
//!
//! Required fields are checked in form order (name, phone, contact method)
//! so the first missing one names the error. Nothing is written unless all
//! of them are present.

use std::sync::Arc;

use tracing::info;

use crate::dto::application_request_dto::{CreateApplicationRequest, UpdateStatusRequest};
use crate::models::application_request::NewApplicationRequest;
use crate::models::ApplicationRequest;
use crate::repositories::ApplicationRequestStore;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::validation::{id_from_json, parse_id, require_text};

pub const NAME_REQUIRED: &str = "Имя обязательно для заполнения";
pub const PHONE_REQUIRED: &str = "Телефон обязателен для заполнения";
pub const CONTACT_METHOD_REQUIRED: &str = "Способ связи обязателен для заполнения";
pub const ID_AND_STATUS_REQUIRED: &str = "ID и статус обязательны";
pub const ID_MISSING: &str = "ID заявки не указан";

pub struct ApplicationRequestController {
    store: Arc<dyn ApplicationRequestStore>,
}

impl ApplicationRequestController {
    pub fn new(store: Arc<dyn ApplicationRequestStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<ApplicationRequest>> {
        self.store.list().await
    }

    pub async fn create(&self, request: CreateApplicationRequest) -> AppResult<ApplicationRequest> {
        let name = require_text(request.name.as_deref(), NAME_REQUIRED)?;
        let phone = require_text(request.phone.as_deref(), PHONE_REQUIRED)?;
        let contact_method = require_text(request.contact_method.as_deref(), CONTACT_METHOD_REQUIRED)?;

        let created = self
            .store
            .create(NewApplicationRequest {
                name: name.to_string(),
                phone: phone.to_string(),
                contact_method: contact_method.to_string(),
            })
            .await?;

        info!("📝 Application request {} created (contact via {})", created.id, created.contact_method);
        Ok(created)
    }

    pub async fn update_status(&self, request: UpdateStatusRequest) -> AppResult<ApplicationRequest> {
        let id = id_from_json(&request.id);
        let status = request.status.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let (Some(id), Some(status)) = (id, status) else {
            return Err(bad_request_error(ID_AND_STATUS_REQUIRED));
        };

        let updated = self
            .store
            .update_status(id, status)
            .await?
            .ok_or_else(|| not_found_error("Заявка", id))?;

        info!("📝 Application request {} moved to '{}'", id, updated.status);
        Ok(updated)
    }

    /// `raw_id` is the untouched `id` query parameter
    pub async fn delete(&self, raw_id: Option<&str>) -> AppResult<()> {
        let id = raw_id.and_then(parse_id).ok_or_else(|| bad_request_error(ID_MISSING))?;

        if !self.store.delete(id).await? {
            return Err(not_found_error("Заявка", id));
        }

        info!("🗑️ Application request {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryApplicationRequestStore;
    use crate::utils::errors::AppError;
    use serde_json::json;

    fn form(name: Option<&str>, phone: Option<&str>, method: Option<&str>) -> CreateApplicationRequest {
        CreateApplicationRequest {
            name: name.map(String::from),
            phone: phone.map(String::from),
            contact_method: method.map(String::from),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn first_missing_field_names_the_error() {
        let store = MemoryApplicationRequestStore::new();
        let controller = ApplicationRequestController::new(Arc::new(store.clone()));

        let err = controller.create(form(None, None, None)).await.unwrap_err();
        assert_eq!(message(err), NAME_REQUIRED);

        let err = controller.create(form(Some("Ирина"), Some(" "), Some("call"))).await.unwrap_err();
        assert_eq!(message(err), PHONE_REQUIRED);

        let err = controller.create(form(Some("Ирина"), Some("+7 911"), None)).await.unwrap_err();
        assert_eq!(message(err), CONTACT_METHOD_REQUIRED);

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn created_requests_start_as_new() {
        let controller = ApplicationRequestController::new(Arc::new(MemoryApplicationRequestStore::new()));
        let created = controller
            .create(form(Some(" Ирина "), Some("+7 911 000 11 22"), Some("whatsapp")))
            .await
            .unwrap();

        assert_eq!(created.name, "Ирина");
        assert_eq!(created.status, "new");
    }

    #[tokio::test]
    async fn status_update_needs_both_fields() {
        let controller = ApplicationRequestController::new(Arc::new(MemoryApplicationRequestStore::new()));
        let err = controller
            .update_status(UpdateStatusRequest { id: json!(1), status: None })
            .await
            .unwrap_err();
        assert_eq!(message(err), ID_AND_STATUS_REQUIRED);
    }

    #[tokio::test]
    async fn status_update_accepts_string_ids() {
        let controller = ApplicationRequestController::new(Arc::new(MemoryApplicationRequestStore::new()));
        let created = controller
            .create(form(Some("Олег"), Some("+7 911"), Some("call")))
            .await
            .unwrap();
        let updated = controller
            .update_status(UpdateStatusRequest {
                id: json!(created.id.to_string()),
                status: Some("processed".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(updated.status, "processed");
    }

    #[tokio::test]
    async fn delete_without_id_is_rejected() {
        let controller = ApplicationRequestController::new(Arc::new(MemoryApplicationRequestStore::new()));
        assert_eq!(message(controller.delete(None).await.unwrap_err()), ID_MISSING);
        assert_eq!(message(controller.delete(Some("abc")).await.unwrap_err()), ID_MISSING);
    }
}
