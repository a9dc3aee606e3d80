//! Operational routes: liveness, readiness, build info and the OpenAPI document.

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::OpenApi;

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    image_host: &'static str,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 503 while PostgreSQL is unreachable. A missing image host client id is reported but does
/// not make the service unready; only uploads fail without it.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let image_host = if state.config.image_host.client_id.is_some() {
        "configured"
    } else {
        "not configured"
    };
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(Readiness { status: "ok", database: "ok", image_host }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "database not reachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness { status: "degraded", database: "unavailable", image_host }),
            )
        }
    }
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
