//! Server binary: reads configuration from the environment, prepares the database and serves the API.

use bizsite::{app, ensure_database_exists, ensure_tables, AppConfig, AppState, ImgurClient};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bizsite=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.image_host.client_id.is_none() {
        tracing::warn!("IMAGE_HOST_CLIENT_ID is not set; image uploads will fail");
    }

    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_tables(&pool).await?;

    let image_host = Arc::new(ImgurClient::new(config.image_host.clone())?);
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(pool, config, image_host);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
