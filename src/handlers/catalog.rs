//! Services catalog. Responses use the `{ "success": true, ... }` envelope.

use crate::error::AppError;
use crate::extractors::{AdminGuard, FormData};
use crate::models::{NewService, Service};
use crate::response::success;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
struct ServiceCreated {
    message: &'static str,
    services_id: i32,
}

#[derive(Serialize)]
struct ServiceList {
    services: Vec<Service>,
}

/// Create a catalog entry.
///
/// Multipart form: `services_name`, `services_large_description`, optional file `services_image`.
/// Without an image the stored URL is empty. A refused upload is passed through and nothing is stored.
#[utoipa::path(
    post,
    path = "/services",
    tag = "services",
    responses(
        (status = 201, description = "Service created, body carries `services_id`"),
        (status = 400, description = "All fields are required")
    )
)]
pub async fn create_service(
    _guard: AdminGuard,
    State(state): State<AppState>,
    form: FormData,
) -> Result<impl IntoResponse, AppError> {
    let service = NewService::from_form(form)?;
    let image_url = match service.image {
        Some(bytes) => state.image_host.upload(bytes).await?,
        None => String::new(),
    };
    let services_id = CatalogService::create(&state.pool, &service.name, &service.description, &image_url).await?;
    Ok(success(
        StatusCode::CREATED,
        ServiceCreated {
            message: "Service created successfully",
            services_id,
        },
    ))
}

#[utoipa::path(
    get,
    path = "/services",
    tag = "services",
    responses((status = 200, description = "`{ success, services: [...] }`"))
)]
pub async fn get_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = CatalogService::list(&state.pool).await?;
    Ok(success(StatusCode::OK, ServiceList { services }))
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "The service", body = Service),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(services_id): Path<i32>,
) -> Result<Json<Service>, AppError> {
    let service = CatalogService::get(&state.pool, services_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))?;
    Ok(Json(service))
}
