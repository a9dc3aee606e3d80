//! Admin rows and the login / add / update request bodies.

use crate::error::AppError;
use crate::service::validation::{looks_like_email, present, take_present};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of an admin. The password hash never leaves [`AdminRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Admin {
    pub admins_id: i32,
    pub admins_name: String,
    pub admins_email: String,
}

/// Full row, used only for credential checks.
#[derive(sqlx::FromRow)]
pub struct AdminRecord {
    pub admins_id: i32,
    pub admins_name: String,
    pub admins_email: String,
    pub admins_password: String,
}

impl From<AdminRecord> for Admin {
    fn from(r: AdminRecord) -> Self {
        Self {
            admins_id: r.admins_id,
            admins_name: r.admins_name,
            admins_email: r.admins_email,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)`.
    pub fn validate(self) -> Result<(String, String), AppError> {
        match (take_present(self.email), self.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok((email.trim().to_string(), password)),
            _ => Err(AppError::Validation("Email and password required".into())),
        }
    }
}

/// Body of `POST /add_admin`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddAdminRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated admin with a plaintext password that still has to be hashed.
#[derive(Debug)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAdminRequest {
    pub fn validate(self) -> Result<NewAdmin, AppError> {
        if present(&self.name).is_none() || present(&self.email).is_none() || present(&self.password).is_none() {
            return Err(AppError::Validation("Name, email and password required".into()));
        }
        let email = self.email.unwrap_or_default().trim().to_string();
        if !looks_like_email(&email) {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
        Ok(NewAdmin {
            name: self.name.unwrap_or_default(),
            email,
            password: self.password.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /admins/{id}`. Absent or blank fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAdminRequest {
    pub admins_name: Option<String>,
    pub admins_email: Option<String>,
    pub admins_password: Option<String>,
}

impl UpdateAdminRequest {
    pub fn validate(self) -> Result<Self, AppError> {
        let admins_email = take_present(self.admins_email).map(|e| e.trim().to_string());
        if let Some(email) = &admins_email {
            if !looks_like_email(email) {
                return Err(AppError::Validation("admins_email must be a valid email".into()));
            }
        }
        Ok(Self {
            admins_name: take_present(self.admins_name),
            admins_email,
            admins_password: take_present(self.admins_password),
        })
    }
}
