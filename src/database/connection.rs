use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Connects and applies pending migrations from `migrations/`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("🗄️ Connecting to PostgreSQL at {}", config.masked_url());
        let pool = config
            .create_pool()
            .await
            .context("could not connect to PostgreSQL")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("could not apply migrations")?;

        info!("✅ Database ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
