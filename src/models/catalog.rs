//! Services catalog entries.

use crate::error::AppError;
use crate::extractors::FormData;
use serde::Serialize;
use utoipa::ToSchema;

/// Catalog entry. `services_image_url` is empty when the service was created without an image.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Service {
    pub services_id: i32,
    pub services_name: String,
    pub services_large_description: String,
    pub services_image_url: String,
}

#[derive(Debug)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub image: Option<Vec<u8>>,
}

impl NewService {
    pub fn from_form(mut form: FormData) -> Result<Self, AppError> {
        let (Some(name), Some(description)) = (
            form.text("services_name").map(String::from),
            form.text("services_large_description").map(String::from),
        ) else {
            return Err(AppError::Validation("All fields are required".into()));
        };
        Ok(Self {
            name,
            description,
            image: form.take_file("services_image"),
        })
    }
}
