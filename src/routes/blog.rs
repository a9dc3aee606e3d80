//! GET/POST /blogs, GET /blogs/:id.

use crate::handlers::blog::{add_blog, get_blog_by_id, get_blogs};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/blogs", get(get_blogs).post(add_blog))
        .route("/blogs/:id", get(get_blog_by_id))
        .with_state(state)
}
