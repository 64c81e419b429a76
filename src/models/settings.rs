//! Site settings model
//!
//! Company name, contacts, social links and logos. Consumers receive a
//! `SiteSettings` value explicitly instead of reading shared state.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("static pattern");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub company_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub instagram_link: String,
    pub telegram_link: String,
    pub whatsapp_link: String,
    pub header_logo_url: Option<String>,
    pub footer_logo_url: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: "Royal Transfer".to_string(),
            phone: "+7 (900) 000 00 00".to_string(),
            email: "info@royaltransfer.ru".to_string(),
            address: "Калининград".to_string(),
            instagram_link: "https://instagram.com/royaltransfer".to_string(),
            telegram_link: "https://t.me/royaltransfer".to_string(),
            whatsapp_link: "https://wa.me/79000000000".to_string(),
            header_logo_url: None,
            footer_logo_url: None,
        }
    }
}

impl SiteSettings {
    /// `tel:` link for the phone with all whitespace removed
    pub fn phone_href(&self) -> String {
        format!("tel:{}", WHITESPACE.replace_all(&self.phone, ""))
    }

    /// Header logo, falling back to the bundled image
    pub fn header_logo(&self) -> &str {
        self.header_logo_url.as_deref().unwrap_or(DEFAULT_LOGO)
    }

    pub fn footer_logo(&self) -> &str {
        self.footer_logo_url.as_deref().unwrap_or(DEFAULT_LOGO)
    }
}

pub const DEFAULT_LOGO: &str = "/images/logo.png";
