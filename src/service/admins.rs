//! Admin accounts. Passwords arrive here already hashed.

use crate::error::AppError;
use crate::models::{AdminRecord, UpdateAdminRequest};
use crate::service::sessions::SessionService;
use sqlx::PgPool;

pub struct AdminService;

fn map_unique(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict("Admin with this email already exists".into())
        }
        _ => AppError::Db(e),
    }
}

impl AdminService {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<AdminRecord>, AppError> {
        let record = sqlx::query_as::<_, AdminRecord>(
            "SELECT admins_id, admins_name, admins_email, admins_password FROM admins WHERE admins_email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;
        Ok(record)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins").fetch_one(pool).await?;
        Ok(count)
    }

    /// Insert an admin whose password is already hashed.
    pub async fn create(pool: &PgPool, name: &str, email: &str, password_hash: &str) -> Result<i32, AppError> {
        let (admins_id,): (i32,) = sqlx::query_as(
            "INSERT INTO admins (admins_name, admins_email, admins_password) VALUES ($1, $2, $3) RETURNING admins_id",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(map_unique)?;
        tracing::info!(admins_id, "admin added");
        Ok(admins_id)
    }

    /// Update the given fields of one admin. `changes.admins_password` must already be a hash.
    /// A password change revokes the admin's sessions in the same transaction.
    pub async fn update(pool: &PgPool, admins_id: i32, changes: &UpdateAdminRequest) -> Result<u64, AppError> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            r#"
            UPDATE admins
            SET admins_name = COALESCE($1, admins_name),
                admins_email = COALESCE($2, admins_email),
                admins_password = COALESCE($3, admins_password)
            WHERE admins_id = $4
            "#,
        )
        .bind(&changes.admins_name)
        .bind(&changes.admins_email)
        .bind(&changes.admins_password)
        .bind(admins_id)
        .execute(&mut *tx)
        .await
        .map_err(map_unique)?;
        if changes.admins_password.is_some() {
            let revoked = SessionService::revoke_all(&mut *tx, admins_id).await?;
            tracing::info!(admins_id, revoked, "password changed, sessions revoked");
        }
        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Sessions go with the admin through `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, admins_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM admins WHERE admins_id = $1")
            .bind(admins_id)
            .execute(pool)
            .await?;
        if result.rows_affected() > 0 {
            tracing::info!(admins_id, "admin deleted");
        }
        Ok(result.rows_affected())
    }
}
