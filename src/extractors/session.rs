//! Admin session from the `admin_session` cookie.

use crate::error::AppError;
use crate::models::Admin;
use crate::service::SessionService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

/// Cookie name carrying the opaque session token.
pub const SESSION_COOKIE: &str = "admin_session";

/// A request made by a logged-in admin. Rejects with 403 when the cookie is missing, unknown or expired.
#[derive(Clone, Debug)]
pub struct AdminSession {
    pub admin: Admin,
    pub token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or(AppError::Forbidden)?;
        let admin = SessionService::find_admin(&state.pool, &token)
            .await?
            .ok_or(AppError::Forbidden)?;
        Ok(AdminSession { admin, token })
    }
}

/// Guard for admin-only mutations. Holds the session when `protect_admin_routes` is on;
/// otherwise lets every request through with `None`.
#[derive(Clone, Debug)]
pub struct AdminGuard(pub Option<AdminSession>);

#[async_trait]
impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if !state.config.protect_admin_routes {
            return Ok(AdminGuard(None));
        }
        let session = AdminSession::from_request_parts(parts, state).await?;
        Ok(AdminGuard(Some(session)))
    }
}

pub fn session_token(headers: &axum::http::HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

    #[test]
    fn token_is_read_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; admin_session=abc123"));
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn legacy_admin_flag_is_not_a_session() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("admin=true"));
        assert!(session_token(&headers).is_none());
    }
}
