//! Database pool configuration

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }

    /// URL with the credentials masked, for logs
    pub fn masked_url(&self) -> String {
        mask_database_url(&self.url)
    }
}

fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    if at_pos < scheme_end {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_masked() {
        let config = DatabaseConfig::new("postgresql://transfer:s3cret@db:5432/royal");
        let masked = config.masked_url();
        assert_eq!(masked, "postgresql://***:***@db:5432/royal");
        assert!(!masked.contains("s3cret"));
    }

    #[test]
    fn urls_without_credentials_are_unchanged() {
        assert_eq!(mask_database_url("postgresql://db/royal"), "postgresql://db/royal");
    }
}
