//! Budget submission, listing and status updates.

use crate::error::AppError;
use crate::extractors::{AdminGuard, JsonBody};
use crate::models::budget::budget_number;
use crate::models::{BudgetRow, CreateBudgetRequest, UpdateBudgetStatusRequest};
use crate::response::{message, message_with};
use crate::service::BudgetService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Create a customer and one budget row per selected service, all sharing one batch number.
#[utoipa::path(
    post,
    path = "/create_budget",
    tag = "budgets",
    request_body = CreateBudgetRequest,
    responses(
        (status = 201, description = "Customer and budget created"),
        (status = 400, description = "No data, or missing customer name or services")
    )
)]
pub async fn create_budget(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateBudgetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let budget = body.validate()?;
    let number = budget_number(chrono::Local::now().naive_local());
    let created = BudgetService::create(&state.pool, &budget, &number).await?;
    Ok(message_with(
        StatusCode::CREATED,
        "Customer and budget created successfully",
        created,
    ))
}

#[utoipa::path(
    get,
    path = "/budgets",
    tag = "budgets",
    responses((status = 200, description = "Budget rows joined to customers, newest first", body = Vec<BudgetRow>))
)]
pub async fn list_budgets(
    _guard: AdminGuard,
    State(state): State<AppState>,
) -> Result<Json<Vec<BudgetRow>>, AppError> {
    Ok(Json(BudgetService::list(&state.pool).await?))
}

/// Set a budget row's status. An unknown id is accepted and changes nothing.
#[utoipa::path(
    put,
    path = "/budgets/{id}",
    tag = "budgets",
    params(("id" = i32, Path, description = "Budget row id")),
    request_body = UpdateBudgetStatusRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Missing status")
    )
)]
pub async fn update_budget_status(
    _guard: AdminGuard,
    State(state): State<AppState>,
    Path(budgets_id): Path<i32>,
    JsonBody(body): JsonBody<UpdateBudgetStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = body.validate()?;
    BudgetService::update_status(&state.pool, budgets_id, &status).await?;
    Ok(message(StatusCode::OK, "Budget status updated successfully"))
}
