//! Buffered multipart form: text fields by name plus uploaded files by name.

use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FormData {
    pub texts: HashMap<String, String>,
    pub files: HashMap<String, Vec<u8>>,
}

impl FormData {
    /// Text field value, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str).filter(|s| !s.trim().is_empty())
    }

    /// Remove and return an uploaded file. Browsers send an empty part when no file was
    /// chosen; such parts never make it into `files`.
    pub fn take_file(&mut self, name: &str) -> Option<Vec<u8>> {
        self.files.remove(name)
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;
        let mut form = FormData::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(field_error)?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if field.file_name().is_some() {
                let data = field.bytes().await.map_err(field_error)?;
                if !data.is_empty() {
                    form.files.insert(name, data.to_vec());
                }
            } else {
                let value = field.text().await.map_err(field_error)?;
                form.texts.insert(name, value);
            }
        }
        Ok(form)
    }
}

fn rejected(status: axum::http::StatusCode, message: String) -> AppError {
    AppError::Rejected { status, message }
}

/// A field that cannot be read: malformed multipart (400) or over the body limit (413).
fn field_error(e: MultipartError) -> AppError {
    rejected(e.status(), e.body_text())
}
