//! Server-side admin sessions. The cookie only carries an opaque random token; the admin it
//! belongs to and its expiry live in `admin_sessions`.

use crate::error::AppError;
use crate::models::Admin;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub admins_id: i32,
    pub expires_at: DateTime<Utc>,
}

pub struct SessionService;

impl SessionService {
    pub async fn create(pool: &PgPool, admins_id: i32, ttl: chrono::Duration) -> Result<Session, AppError> {
        let session = Session {
            token: new_token(),
            admins_id,
            expires_at: Utc::now() + ttl,
        };
        sqlx::query("INSERT INTO admin_sessions (token, admins_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&session.token)
            .bind(session.admins_id)
            .bind(session.expires_at)
            .execute(pool)
            .await?;
        Ok(session)
    }

    /// The admin owning an unexpired session, if any.
    pub async fn find_admin(pool: &PgPool, token: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT a.admins_id, a.admins_name, a.admins_email
            FROM admin_sessions s
            JOIN admins a ON a.admins_id = s.admins_id
            WHERE s.token = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await?;
        Ok(admin)
    }

    pub async fn revoke(pool: &PgPool, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Drop every session of one admin; used when their password changes.
    pub async fn revoke_all(conn: &mut PgConnection, admins_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE admins_id = $1")
            .bind(admins_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn purge_expired(pool: &PgPool) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// 244 random bits from two v4 UUIDs, hex encoded.
fn new_token() -> String {
    format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_long_hex_and_unique() {
        let a = new_token();
        let b = new_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
