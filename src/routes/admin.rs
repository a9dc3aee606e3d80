//! Login, logout, session check and admin management.

use crate::handlers::admin::{add_admin, check_admin, delete_admin, login, logout, update_admin};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/check-admin", get(check_admin))
        .route("/add_admin", post(add_admin))
        .route("/admins/:id", put(update_admin).delete(delete_admin))
        .with_state(state)
}
