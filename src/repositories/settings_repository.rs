use async_trait::async_trait;
use sqlx::PgPool;

use super::SettingsStore;
use crate::models::SiteSettings;
use crate::utils::errors::AppResult;

const COLUMNS: &str = "company_name, phone, email, address, instagram_link, telegram_link, \
                       whatsapp_link, header_logo_url, footer_logo_url";

/// Settings live in a single row with `id = 1`
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn get(&self) -> AppResult<SiteSettings> {
        let settings = sqlx::query_as::<_, SiteSettings>(&format!(
            "SELECT {COLUMNS} FROM site_settings WHERE id = 1"
        ))
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings.unwrap_or_default())
    }

    async fn save(&self, settings: SiteSettings) -> AppResult<SiteSettings> {
        let saved = sqlx::query_as::<_, SiteSettings>(&format!(
            r#"
            INSERT INTO site_settings (id, {COLUMNS})
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                company_name = EXCLUDED.company_name,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                instagram_link = EXCLUDED.instagram_link,
                telegram_link = EXCLUDED.telegram_link,
                whatsapp_link = EXCLUDED.whatsapp_link,
                header_logo_url = EXCLUDED.header_logo_url,
                footer_logo_url = EXCLUDED.footer_logo_url
            RETURNING {COLUMNS}
            "#
        ))
        .bind(settings.company_name)
        .bind(settings.phone)
        .bind(settings.email)
        .bind(settings.address)
        .bind(settings.instagram_link)
        .bind(settings.telegram_link)
        .bind(settings.whatsapp_link)
        .bind(settings.header_logo_url)
        .bind(settings.footer_logo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
