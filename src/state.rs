//! Shared application state for all routes. Cloned per request; everything inside is shared.

use crate::config::AppConfig;
use crate::image_host::ImageHost;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub image_host: Arc<dyn ImageHost>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig, image_host: Arc<dyn ImageHost>) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            image_host,
        }
    }
}
