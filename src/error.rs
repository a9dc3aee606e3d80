//! Typed errors and HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`; this is the only place where an error becomes
//! a status code. Database, hashing and transport details are logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    /// Body or multipart extraction failed; keeps the rejection's own status (400, 413, 415).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("{0}")]
    Unauthorized(String),
    #[error("forbidden")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// Image host answered with a non-success status; passed through to the caller as-is.
    #[error("image upload failed with status {status}")]
    Upstream { status: u16, body: String },
    #[error("image host: {0}")]
    ImageHost(String),
    #[error("password hash: {0}")]
    Hash(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::ImageHost(_) | AppError::Hash(_) | AppError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            AppError::Forbidden => ErrorBody { success: false, message: None, error: None },
            AppError::Upstream { body, .. } => ErrorBody {
                success: false,
                message: Some("Image upload failed".into()),
                error: Some(body.clone()),
            },
            AppError::Db(sqlx::Error::RowNotFound) => ErrorBody {
                success: false,
                message: Some("Not found".into()),
                error: None,
            },
            AppError::Config(_) | AppError::ImageHost(_) | AppError::Hash(_) | AppError::Db(_) => {
                ErrorBody {
                    success: false,
                    message: Some("Internal server error".into()),
                    error: None,
                }
            }
            other => ErrorBody {
                success: false,
                message: Some(other.to_string()),
                error: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message() {
        let err = AppError::Validation("Missing blog details".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false, "message": "Missing blog details" }));
    }

    #[test]
    fn database_errors_do_not_leak_details() {
        let err = AppError::Db(sqlx::Error::Protocol("relation \"blogs\" does not exist".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body["message"], "Internal server error");
        assert!(!body.to_string().contains("relation"));
    }

    #[test]
    fn row_not_found_maps_to_404() {
        assert_eq!(AppError::Db(sqlx::Error::RowNotFound).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_status_and_body_pass_through() {
        let err = AppError::Upstream { status: 429, body: "{\"data\":{\"error\":\"slow down\"}}".into() };
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body["message"], "Image upload failed");
        assert_eq!(body["error"], "{\"data\":{\"error\":\"slow down\"}}");
    }

    #[test]
    fn nonsense_upstream_status_becomes_bad_gateway() {
        let err = AppError::Upstream { status: 42, body: String::new() };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn rejections_keep_their_status() {
        let err = AppError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".into(),
        };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false, "message": "length limit exceeded" }));
    }

    #[test]
    fn forbidden_body_is_bare() {
        let body = serde_json::to_value(AppError::Forbidden.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false }));
    }
}
