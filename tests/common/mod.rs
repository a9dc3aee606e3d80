#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use bizsite::{app, AppConfig, AppError, AppState, ImageHost};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub const BOUNDARY: &str = "XTESTBOUNDARY";

/// Image host double: either hands out a fixed link or fails like the real host would.
pub struct MockImageHost {
    outcome: Result<String, (u16, String)>,
    calls: AtomicUsize,
}

impl MockImageHost {
    pub fn ok(link: &str) -> Arc<Self> {
        Arc::new(Self { outcome: Ok(link.to_string()), calls: AtomicUsize::new(0) })
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self { outcome: Err((status, body.to_string())), calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload(&self, _image: Vec<u8>) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(link) => Ok(link.clone()),
            Err((status, body)) => Err(AppError::Upstream { status: *status, body: body.clone() }),
        }
    }
}

pub fn config(database_url: &str, protect_admin_routes: bool) -> AppConfig {
    let protect = if protect_admin_routes { "true" } else { "false" };
    config_with(database_url, &[("PROTECT_ADMIN_ROUTES", protect)])
}

/// Config from `DATABASE_URL` plus explicit environment overrides.
pub fn config_with(database_url: &str, overrides: &[(&str, &str)]) -> AppConfig {
    let mut env: HashMap<String, String> =
        overrides.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    env.insert("DATABASE_URL".into(), database_url.to_string());
    AppConfig::from_lookup(move |key| env.get(key).cloned()).unwrap()
}

const OFFLINE_URL: &str = "postgres://nobody@127.0.0.1:1/unused";

/// App over a pool that never connects; only usable for requests rejected before any query.
pub fn offline_app(image_host: Arc<MockImageHost>, protect_admin_routes: bool) -> Router {
    offline_app_with(image_host, config(OFFLINE_URL, protect_admin_routes))
}

pub fn offline_app_with(image_host: Arc<MockImageHost>, config: AppConfig) -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new().connect_lazy(OFFLINE_URL).unwrap();
    app(AppState::new(pool, config, image_host))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

/// Multipart request from text fields and optional `(field, filename, bytes)` files.
pub fn multipart_request(uri: &str, texts: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in texts {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n").as_bytes(),
        );
    }
    for (name, filename, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_full(app, req).await;
    (status, body)
}

/// Status, response headers and JSON body (`Null` for an empty body).
pub async fn send_full(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response: Response<Body> = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, headers, body)
}
