use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::models::SiteSettings;
use crate::repositories::SettingsStore;
use crate::utils::errors::AppResult;

pub struct SettingsController {
    store: Arc<dyn SettingsStore>,
}

impl SettingsController {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> AppResult<SiteSettings> {
        self.store.get().await
    }

    pub async fn update(&self, request: UpdateSettingsRequest) -> AppResult<SiteSettings> {
        request.validate()?;
        let current = self.store.get().await?;
        let saved = self.store.save(request.apply(current)).await?;
        info!("⚙️ Site settings updated for '{}'", saved.company_name);
        Ok(saved)
    }
}
