//! Response body helpers.
//!
//! Budget, blog and admin-management routes answer with a plain `{ "message": ... }` object;
//! catalog, login and session routes wrap their payload in a `{ "success": true, ... }`
//! envelope. Errors always use [`crate::error::ErrorBody`].

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Message<T> {
    pub message: &'static str,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

/// Empty payload for message-only bodies.
#[derive(Serialize)]
pub struct Nothing {}

pub fn message(status: StatusCode, message: &'static str) -> (StatusCode, Json<Message<Nothing>>) {
    message_with(status, message, Nothing {})
}

pub fn message_with<T: Serialize>(
    status: StatusCode,
    message: &'static str,
    data: T,
) -> (StatusCode, Json<Message<T>>) {
    (status, Json(Message { message, data }))
}

pub fn success<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<Success<T>>) {
    (status, Json(Success { success: true, data }))
}
