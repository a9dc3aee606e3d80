//! Services catalog storage.

use crate::error::AppError;
use crate::models::Service;
use sqlx::PgPool;

const SELECT_SERVICE: &str =
    "SELECT services_id, services_name, services_large_description, services_image_url FROM services";

pub struct CatalogService;

impl CatalogService {
    /// Insert one catalog entry; `image_url` is `""` when there is no image.
    pub async fn create(pool: &PgPool, name: &str, description: &str, image_url: &str) -> Result<i32, AppError> {
        let (services_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO services (services_name, services_large_description, services_image_url)
            VALUES ($1, $2, $3)
            RETURNING services_id
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(image_url)
        .fetch_one(pool)
        .await?;
        tracing::info!(services_id, "service created");
        Ok(services_id)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, AppError> {
        let sql = format!("{} ORDER BY services_id", SELECT_SERVICE);
        Ok(sqlx::query_as::<_, Service>(&sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &PgPool, services_id: i32) -> Result<Option<Service>, AppError> {
        let sql = format!("{} WHERE services_id = $1", SELECT_SERVICE);
        Ok(sqlx::query_as::<_, Service>(&sql).bind(services_id).fetch_optional(pool).await?)
    }
}
