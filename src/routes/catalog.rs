//! GET/POST /services, GET /services/:id.

use crate::handlers::catalog::{create_service, get_service, get_services};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/services", get(get_services).post(create_service))
        .route("/services/:id", get(get_service))
        .with_state(state)
}
