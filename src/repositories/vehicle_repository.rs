use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::VehicleStore;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::Vehicle;
use crate::utils::errors::AppResult;

const COLUMNS: &str =
    "id, class, brand, model, year, seats, description, image_url, amenities, is_active";

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {COLUMNS} FROM vehicles ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("🚗 Loaded {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {COLUMNS} FROM vehicles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles (class, brand, model, year, seats, description, image_url, amenities, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(request.class.trim())
        .bind(request.brand)
        .bind(request.model)
        .bind(request.year)
        .bind(request.seats)
        .bind(request.description)
        .bind(request.image_url)
        .bind(request.amenities)
        .bind(request.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn update(&self, id: i32, request: UpdateVehicleRequest) -> AppResult<Option<Vehicle>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            UPDATE vehicles
            SET class = $2, brand = $3, model = $4, year = $5, seats = $6,
                description = $7, image_url = $8, amenities = $9, is_active = $10
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(request.class.map(|c| c.trim().to_string()).unwrap_or(current.class))
        .bind(request.brand.unwrap_or(current.brand))
        .bind(request.model.unwrap_or(current.model))
        .bind(request.year.unwrap_or(current.year))
        .bind(request.seats.unwrap_or(current.seats))
        .bind(request.description.unwrap_or(current.description))
        .bind(request.image_url.unwrap_or(current.image_url))
        .bind(request.amenities.unwrap_or(current.amenities))
        .bind(request.is_active.unwrap_or(current.is_active))
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
