//! Table DDL and database bootstrap. All statements are idempotent so the server can run them on every start.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Creation order matters: budgets reference customers, sessions reference admins.
const TABLES: &[(&str, &str)] = &[
    (
        "customers",
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            customers_id SERIAL PRIMARY KEY,
            customers_name TEXT NOT NULL,
            customers_city TEXT,
            customers_phone TEXT,
            customers_comment TEXT
        )
        "#,
    ),
    (
        "services",
        r#"
        CREATE TABLE IF NOT EXISTS services (
            services_id SERIAL PRIMARY KEY,
            services_name TEXT NOT NULL,
            services_large_description TEXT NOT NULL,
            services_image_url TEXT NOT NULL DEFAULT ''
        )
        "#,
    ),
    (
        "budgets",
        r#"
        CREATE TABLE IF NOT EXISTS budgets (
            budgets_id SERIAL PRIMARY KEY,
            budgets_number TEXT NOT NULL,
            budgets_customers_id INTEGER NOT NULL REFERENCES customers (customers_id),
            budgets_services_id INTEGER NOT NULL,
            budgets_status TEXT NOT NULL DEFAULT 'new'
        )
        "#,
    ),
    (
        "blogs",
        r#"
        CREATE TABLE IF NOT EXISTS blogs (
            blogs_id SERIAL PRIMARY KEY,
            blogs_title TEXT NOT NULL,
            blogs_content TEXT NOT NULL,
            blogs_author TEXT NOT NULL,
            blogs_date TIMESTAMP NOT NULL,
            blogs_image_url TEXT
        )
        "#,
    ),
    (
        "admins",
        r#"
        CREATE TABLE IF NOT EXISTS admins (
            admins_id SERIAL PRIMARY KEY,
            admins_name TEXT NOT NULL,
            admins_email TEXT NOT NULL UNIQUE,
            admins_password TEXT NOT NULL
        )
        "#,
    ),
    (
        "admin_sessions",
        r#"
        CREATE TABLE IF NOT EXISTS admin_sessions (
            token TEXT PRIMARY KEY,
            admins_id INTEGER NOT NULL REFERENCES admins (admins_id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            expires_at TIMESTAMPTZ NOT NULL
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS budgets_number_idx ON budgets (budgets_number)",
    "CREATE INDEX IF NOT EXISTS admin_sessions_admins_id_idx ON admin_sessions (admins_id)",
];

/// Create all application tables and indexes if they do not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table = name, "table ensured");
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    };
    // Query parameters may contain slashes (`?host=/var/run/postgresql`).
    let (without_query, query) = match url.split_once('?') {
        Some((head, query)) => (head, Some(query)),
        None => (url, None),
    };
    let scheme_end = without_query.find("://").ok_or_else(invalid)? + 3;
    let path_start = without_query
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(invalid)?;
    let db_name = without_query.get(path_start..).unwrap_or("").trim();
    let base = without_query.get(..path_start).unwrap_or(without_query);
    let admin_url = match query {
        Some(query) => format!("{}postgres?{}", base, query),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
