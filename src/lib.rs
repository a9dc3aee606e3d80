//! Backend for a small business site: customer budget requests, a blog, a services catalog
//! and admin authentication on PostgreSQL, with images stored on an external host.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod image_host;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use image_host::{ImageHost, ImgurClient};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
