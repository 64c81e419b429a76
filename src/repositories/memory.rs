//! In-memory stores
//!
//! Used when the server runs without `DATABASE_URL` and by the test suites.
//! `set_unavailable(true)` makes every call fail like a lost database
//! connection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ApplicationRequestStore, SettingsStore, VehicleStore};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::application_request::{NewApplicationRequest, STATUS_NEW};
use crate::models::{ApplicationRequest, SiteSettings, Vehicle};
use crate::utils::errors::{AppError, AppResult};

#[derive(Default)]
struct Availability(AtomicBool);

impl Availability {
    fn check(&self) -> AppResult<()> {
        if self.0.load(Ordering::SeqCst) {
            return Err(AppError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn set(&self, unavailable: bool) {
        self.0.store(unavailable, Ordering::SeqCst);
    }
}

struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Clone, Default)]
pub struct MemoryVehicleStore {
    table: Arc<RwLock<Table<Vehicle>>>,
    availability: Arc<Availability>,
}

impl MemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `vehicles`; ids are kept as given
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let next_id = vehicles.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: vehicles,
                next_id,
            })),
            availability: Arc::default(),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.availability.set(unavailable);
    }
}

#[async_trait]
impl VehicleStore for MemoryVehicleStore {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.availability.check()?;
        let mut vehicles = self.table.read().await.rows.clone();
        vehicles.sort_by_key(|v| v.id);
        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        self.availability.check()?;
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|v| v.id == id).cloned())
    }

    async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        let vehicle = Vehicle {
            id: table.allocate_id(),
            class: request.class.trim().to_string(),
            brand: request.brand,
            model: request.model,
            year: request.year,
            seats: request.seats,
            description: request.description,
            image_url: request.image_url,
            amenities: request.amenities,
            is_active: request.is_active.unwrap_or(true),
        };
        table.rows.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn update(&self, id: i32, request: UpdateVehicleRequest) -> AppResult<Option<Vehicle>> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        let Some(vehicle) = table.rows.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };

        if let Some(class) = request.class {
            vehicle.class = class.trim().to_string();
        }
        if let Some(brand) = request.brand {
            vehicle.brand = brand;
        }
        if let Some(model) = request.model {
            vehicle.model = model;
        }
        if let Some(year) = request.year {
            vehicle.year = year;
        }
        if let Some(seats) = request.seats {
            vehicle.seats = seats;
        }
        if let Some(description) = request.description {
            vehicle.description = description;
        }
        if let Some(image_url) = request.image_url {
            vehicle.image_url = image_url;
        }
        if let Some(amenities) = request.amenities {
            vehicle.amenities = amenities;
        }
        if let Some(is_active) = request.is_active {
            vehicle.is_active = is_active;
        }

        Ok(Some(vehicle.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|v| v.id != id);
        Ok(table.rows.len() < before)
    }
}

#[derive(Clone, Default)]
pub struct MemoryApplicationRequestStore {
    table: Arc<RwLock<Table<ApplicationRequest>>>,
    availability: Arc<Availability>,
}

impl MemoryApplicationRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.availability.set(unavailable);
    }

    /// Number of stored requests, bypassing availability
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ApplicationRequestStore for MemoryApplicationRequestStore {
    async fn list(&self) -> AppResult<Vec<ApplicationRequest>> {
        self.availability.check()?;
        let mut requests = self.table.read().await.rows.clone();
        requests.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(requests)
    }

    async fn create(&self, request: NewApplicationRequest) -> AppResult<ApplicationRequest> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        let now = Utc::now();
        let created = ApplicationRequest {
            id: table.allocate_id(),
            name: request.name,
            phone: request.phone,
            contact_method: request.contact_method,
            status: STATUS_NEW.to_string(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update_status(&self, id: i32, status: &str) -> AppResult<Option<ApplicationRequest>> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        let Some(request) = table.rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        request.status = status.to_string();
        request.updated_at = Utc::now();
        Ok(Some(request.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        self.availability.check()?;
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() < before)
    }
}

#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    settings: Arc<RwLock<Option<SiteSettings>>>,
    availability: Arc<Availability>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.availability.set(unavailable);
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self) -> AppResult<SiteSettings> {
        self.availability.check()?;
        Ok(self.settings.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, settings: SiteSettings) -> AppResult<SiteSettings> {
        self.availability.check()?;
        *self.settings.write().await = Some(settings.clone());
        Ok(settings)
    }
}
