use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::Vehicle;
use crate::repositories::VehicleStore;
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Vehicle> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Автомобиль", id))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        if request.class.trim().is_empty() {
            return Err(validation_error("Класс автомобиля обязателен"));
        }

        let vehicle = self.store.create(request).await?;
        info!("🚗 Vehicle {} created ({} {} {})", vehicle.id, vehicle.class, vehicle.brand, vehicle.model);
        Ok(vehicle)
    }

    pub async fn update(&self, id: i32, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        if matches!(request.class.as_deref(), Some(class) if class.trim().is_empty()) {
            return Err(validation_error("Класс автомобиля обязателен"));
        }

        let vehicle = self
            .store
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Автомобиль", id))?;
        info!("🚗 Vehicle {} updated", id);
        Ok(vehicle)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found_error("Автомобиль", id));
        }
        info!("🗑️ Vehicle {} deleted", id);
        Ok(())
    }
}
