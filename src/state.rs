//! Shared application state
//!
//! Cloned into every handler by the axum router.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::repositories::{
    ApplicationRequestRepository, ApplicationRequestStore, MemoryApplicationRequestStore,
    MemorySettingsStore, MemoryVehicleStore, SettingsRepository, SettingsStore, VehicleRepository,
    VehicleStore,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: Arc<dyn VehicleStore>,
    pub application_requests: Arc<dyn ApplicationRequestStore>,
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn with_pool(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            config,
            vehicles: Arc::new(VehicleRepository::new(pool.clone())),
            application_requests: Arc::new(ApplicationRequestRepository::new(pool.clone())),
            settings: Arc::new(SettingsRepository::new(pool)),
        }
    }

    /// State backed by empty in-memory stores
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        Self::from_stores(
            config,
            MemoryVehicleStore::new(),
            MemoryApplicationRequestStore::new(),
            MemorySettingsStore::new(),
        )
    }

    pub fn from_stores(
        config: EnvironmentConfig,
        vehicles: impl VehicleStore + 'static,
        application_requests: impl ApplicationRequestStore + 'static,
        settings: impl SettingsStore + 'static,
    ) -> Self {
        Self {
            config,
            vehicles: Arc::new(vehicles),
            application_requests: Arc::new(application_requests),
            settings: Arc::new(settings),
        }
    }
}
