//! Environment configuration

use std::env;

use anyhow::{Context, Result};

/// Server configuration read from the environment
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// `None` runs the server on in-memory storage
    pub database_url: Option<String>,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Reads `ENVIRONMENT`, `HOST`, `PORT`, `DATABASE_URL`, `CORS_ORIGINS`
    /// and `LOG_LEVEL`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            Err(_) => defaults.port,
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("LOG_LEVEL must be a tracing level, got '{}'", raw))?,
            Err(_) => defaults.log_level,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),
            log_level,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" https://royaltransfer.ru , ,http://localhost:3001"),
            vec!["https://royaltransfer.ru", "http://localhost:3001"]
        );
    }

    #[test]
    fn default_config_runs_in_memory() {
        let config = EnvironmentConfig::default();
        assert!(config.database_url.is_none());
        assert!(!config.is_production());
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }
}
