//! Budget submission, listing and status updates.

use crate::handlers::budget::{create_budget, list_budgets, update_budget_status};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn budget_routes(state: AppState) -> Router {
    Router::new()
        .route("/create_budget", post(create_budget))
        .route("/budgets", get(list_budgets))
        .route("/budgets/:id", put(update_budget_status))
        .with_state(state)
}
