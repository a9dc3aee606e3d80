//! Router assembly. Each resource builds its own stateful router; [`app`] merges them and
//! adds the request-wide layers.

pub mod admin;
pub mod blog;
pub mod budget;
pub mod catalog;
pub mod common;

pub use admin::admin_routes;
pub use blog::blog_routes;
pub use budget::budget_routes;
pub use catalog::catalog_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// The full application: every route plus body limits and request tracing.
pub fn app(state: AppState) -> Router {
    let limit = state.config.body_limit_bytes;
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(budget_routes(state.clone()))
        .merge(blog_routes(state.clone()))
        .merge(catalog_routes(state.clone()))
        .merge(admin_routes(state))
        .layer(DefaultBodyLimit::max(limit))
        .layer(RequestBodyLimitLayer::new(limit))
        .layer(TraceLayer::new_for_http())
}
