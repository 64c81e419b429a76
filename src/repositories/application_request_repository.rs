use async_trait::async_trait;
use sqlx::PgPool;

use super::ApplicationRequestStore;
use crate::models::application_request::{NewApplicationRequest, STATUS_NEW};
use crate::models::ApplicationRequest;
use crate::utils::errors::AppResult;

const COLUMNS: &str = "id, name, phone, contact_method, status, created_at, updated_at";

pub struct ApplicationRequestRepository {
    pool: PgPool,
}

impl ApplicationRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRequestStore for ApplicationRequestRepository {
    async fn list(&self) -> AppResult<Vec<ApplicationRequest>> {
        let requests = sqlx::query_as::<_, ApplicationRequest>(&format!(
            "SELECT {COLUMNS} FROM application_requests ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    async fn create(&self, request: NewApplicationRequest) -> AppResult<ApplicationRequest> {
        let created = sqlx::query_as::<_, ApplicationRequest>(&format!(
            r#"
            INSERT INTO application_requests (name, phone, contact_method, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.phone)
        .bind(request.contact_method)
        .bind(STATUS_NEW)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_status(&self, id: i32, status: &str) -> AppResult<Option<ApplicationRequest>> {
        let updated = sqlx::query_as::<_, ApplicationRequest>(&format!(
            r#"
            UPDATE application_requests
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM application_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
