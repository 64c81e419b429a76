use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::SiteSettings;

/// Partial update of the site settings.
///
/// Logo fields distinguish "absent" (keep) from `null` or `""` (reset to the
/// bundled logo).
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 200))]
    pub company_name: Option<String>,

    #[validate(length(min = 3, max = 50))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub address: Option<String>,

    #[validate(url)]
    pub instagram_link: Option<String>,

    #[validate(url)]
    pub telegram_link: Option<String>,

    #[validate(url)]
    pub whatsapp_link: Option<String>,

    #[serde(default, deserialize_with = "crate::dto::nullable")]
    pub header_logo_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "crate::dto::nullable")]
    pub footer_logo_url: Option<Option<String>>,
}

impl UpdateSettingsRequest {
    /// Applies the present fields on top of `current`
    pub fn apply(self, current: SiteSettings) -> SiteSettings {
        SiteSettings {
            company_name: self.company_name.unwrap_or(current.company_name),
            phone: self.phone.unwrap_or(current.phone),
            email: self.email.unwrap_or(current.email),
            address: self.address.unwrap_or(current.address),
            instagram_link: self.instagram_link.unwrap_or(current.instagram_link),
            telegram_link: self.telegram_link.unwrap_or(current.telegram_link),
            whatsapp_link: self.whatsapp_link.unwrap_or(current.whatsapp_link),
            header_logo_url: self.header_logo_url.unwrap_or(current.header_logo_url),
            footer_logo_url: self.footer_logo_url.unwrap_or(current.footer_logo_url),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: SiteSettings,
}
