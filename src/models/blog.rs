//! Blog posts and the multipart form that creates them.

use crate::error::AppError;
use crate::extractors::FormData;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Blog {
    pub blogs_id: i32,
    pub blogs_title: String,
    pub blogs_content: String,
    pub blogs_author: String,
    #[serde(serialize_with = "serialize_timestamp")]
    #[schema(value_type = String, example = "2024-05-01 10:30:00")]
    pub blogs_date: NaiveDateTime,
    pub blogs_image_url: Option<String>,
}

/// Validated multipart fields of `POST /blogs`. The image is still raw bytes here.
#[derive(Debug)]
pub struct BlogForm {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image: Option<Vec<u8>>,
}

impl BlogForm {
    pub fn from_form(mut form: FormData) -> Result<Self, AppError> {
        let (Some(title), Some(content), Some(author)) = (
            form.text("blogs_title").map(String::from),
            form.text("blogs_content").map(String::from),
            form.text("blogs_author").map(String::from),
        ) else {
            return Err(AppError::Validation("Missing blog details".into()));
        };
        Ok(Self {
            title,
            content,
            author,
            image: form.take_file("blogs_image"),
        })
    }
}

#[derive(Debug)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDateTime,
    pub image_url: Option<String>,
}

fn serialize_timestamp<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(super::TIMESTAMP_FORMAT))
}
