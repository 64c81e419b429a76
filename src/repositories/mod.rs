//! Persistence layer
//!
//! Each resource has a store trait with a PostgreSQL implementation and an
//! in-memory one, used when no `DATABASE_URL` is configured and by tests.

pub mod application_request_repository;
pub mod memory;
pub mod settings_repository;
pub mod vehicle_repository;

use async_trait::async_trait;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::application_request::NewApplicationRequest;
use crate::models::{ApplicationRequest, SiteSettings, Vehicle};
use crate::utils::errors::AppResult;

pub use application_request_repository::ApplicationRequestRepository;
pub use memory::{MemoryApplicationRequestStore, MemorySettingsStore, MemoryVehicleStore};
pub use settings_repository::SettingsRepository;
pub use vehicle_repository::VehicleRepository;

#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// All vehicles, active or not, ordered by id
    async fn list(&self) -> AppResult<Vec<Vehicle>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>>;
    async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle>;
    /// `None` when no vehicle has this id
    async fn update(&self, id: i32, request: UpdateVehicleRequest) -> AppResult<Option<Vehicle>>;
    /// `false` when no vehicle has this id
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[async_trait]
pub trait ApplicationRequestStore: Send + Sync {
    /// Newest first
    async fn list(&self) -> AppResult<Vec<ApplicationRequest>>;
    async fn create(&self, request: NewApplicationRequest) -> AppResult<ApplicationRequest>;
    async fn update_status(&self, id: i32, status: &str) -> AppResult<Option<ApplicationRequest>>;
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored settings, or the defaults when none were saved yet
    async fn get(&self) -> AppResult<SiteSettings>;
    async fn save(&self, settings: SiteSettings) -> AppResult<SiteSettings>;
}
