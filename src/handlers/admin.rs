//! Admin login, session check and admin management.

use crate::error::AppError;
use crate::extractors::{AdminGuard, AdminSession, JsonBody, SESSION_COOKIE};
use crate::models::{AddAdminRequest, Admin, LoginRequest, UpdateAdminRequest};
use crate::response::{message, message_with, success, Nothing};
use crate::service::{password, AdminService, SessionService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

#[derive(Serialize)]
struct AdminBody {
    admin: Admin,
}

#[derive(Serialize)]
struct AdminCreated {
    admins_id: i32,
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(secure);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// Check credentials and open a session. The session token is set as an HttpOnly cookie.
#[utoipa::path(
    post,
    path = "/login",
    tag = "admins",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; body carries the admin without password"),
        (status = 400, description = "Email and password required"),
        (status = 401, description = "Invalid password"),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (email, password) = body.validate()?;
    let record = AdminService::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("Admin not found".into()))?;
    if !password::verify(password, record.admins_password.clone()).await? {
        tracing::warn!(admins_id = record.admins_id, "login rejected: wrong password");
        return Err(AppError::Unauthorized("Invalid password".into()));
    }

    let purged = SessionService::purge_expired(&state.pool).await?;
    if purged > 0 {
        tracing::debug!(purged, "expired sessions removed");
    }
    let session = SessionService::create(&state.pool, record.admins_id, state.config.session.ttl).await?;
    tracing::info!(admins_id = record.admins_id, expires_at = %session.expires_at, "admin logged in");

    let jar = jar.add(session_cookie(session.token, state.config.session.cookie_secure));
    Ok((jar, success(StatusCode::OK, AdminBody { admin: record.into() })))
}

/// Close the current session, if any, and clear the cookie.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "admins",
    responses((status = 200, description = "Logged out"))
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) {
        SessionService::revoke(&state.pool, &token).await?;
    }
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    Ok((jar.remove(removal), success(StatusCode::OK, Nothing {})))
}

/// 200 with the admin when the request carries a live session, 403 otherwise.
#[utoipa::path(
    get,
    path = "/check-admin",
    tag = "admins",
    responses(
        (status = 200, description = "Valid admin session", body = Admin),
        (status = 403, description = "No valid session")
    )
)]
pub async fn check_admin(session: AdminSession) -> impl IntoResponse {
    success(StatusCode::OK, AdminBody { admin: session.admin })
}

/// With route protection on, only a logged-in admin may add admins, except for the very
/// first one: an empty `admins` table has nobody who could log in.
fn may_add_admin(protected: bool, has_session: bool, existing_admins: i64) -> bool {
    !protected || has_session || existing_admins == 0
}

/// Create an admin. The password is hashed with a fresh salt before it is stored.
#[utoipa::path(
    post,
    path = "/add_admin",
    tag = "admins",
    request_body = AddAdminRequest,
    responses(
        (status = 201, description = "Admin added"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 403, description = "Route protection on, no session, and admins already exist"),
        (status = 409, description = "Email already used")
    )
)]
pub async fn add_admin(
    session: Option<AdminSession>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AddAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    let protected = state.config.protect_admin_routes;
    if protected && session.is_none() {
        let existing = AdminService::count(&state.pool).await?;
        if !may_add_admin(protected, false, existing) {
            return Err(AppError::Forbidden);
        }
        tracing::info!("no admins yet, accepting first admin without a session");
    }
    let admin = body.validate()?;
    let hash = password::hash(admin.password).await?;
    let admins_id = AdminService::create(&state.pool, &admin.name, &admin.email, &hash).await?;
    Ok(message_with(StatusCode::CREATED, "Admin added successfully", AdminCreated { admins_id }))
}

/// Update name, email and/or password. A new password is hashed and ends the admin's sessions.
#[utoipa::path(
    put,
    path = "/admins/{id}",
    tag = "admins",
    params(("id" = i32, Path, description = "Admin id")),
    request_body = UpdateAdminRequest,
    responses((status = 200, description = "Admin profile updated"))
)]
pub async fn update_admin(
    _guard: AdminGuard,
    State(state): State<AppState>,
    Path(admins_id): Path<i32>,
    JsonBody(body): JsonBody<UpdateAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut changes = body.validate()?;
    if let Some(plain) = changes.admins_password.take() {
        changes.admins_password = Some(password::hash(plain).await?);
    }
    AdminService::update(&state.pool, admins_id, &changes).await?;
    Ok(message(StatusCode::OK, "Admin profile updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/admins/{id}",
    tag = "admins",
    params(("id" = i32, Path, description = "Admin id")),
    responses((status = 200, description = "Admin profile deleted"))
)]
pub async fn delete_admin(
    _guard: AdminGuard,
    State(state): State<AppState>,
    Path(admins_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminService::delete(&state.pool, admins_id).await?;
    Ok(message(StatusCode::OK, "Admin profile deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_admin_can_be_added_without_a_session() {
        assert!(may_add_admin(false, false, 3));
        assert!(may_add_admin(true, true, 3));
        assert!(may_add_admin(true, false, 0));
        assert!(!may_add_admin(true, false, 1));
    }

    #[test]
    fn session_cookie_is_http_only_and_site_wide() {
        let cookie = session_cookie("tok".into(), true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
