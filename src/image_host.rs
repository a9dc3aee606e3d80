//! External image hosting (Imgur-compatible upload API).
//!
//! The contract is narrow: raw image bytes go in as a base64 `image` form field, a hosted link
//! comes out of `data.link`. Any non-200 answer is surfaced to the caller verbatim.

use crate::config::ImageHostConfig;
use crate::error::AppError;
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload one image and return its public link.
    async fn upload(&self, image: Vec<u8>) -> Result<String, AppError>;
}

pub struct ImgurClient {
    http: reqwest::Client,
    config: ImageHostConfig,
}

#[derive(Deserialize)]
struct UploadResponse {
    data: UploadData,
}

#[derive(Deserialize)]
struct UploadData {
    link: String,
}

impl ImgurClient {
    pub fn new(config: ImageHostConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::ImageHost(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl ImageHost for ImgurClient {
    async fn upload(&self, image: Vec<u8>) -> Result<String, AppError> {
        let client_id = self
            .config
            .client_id
            .as_deref()
            .ok_or_else(|| AppError::ImageHost("IMAGE_HOST_CLIENT_ID is not configured".into()))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&image);

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("Client-ID {}", client_id))
            .form(&[("image", encoded)])
            .send()
            .await
            .map_err(|e| AppError::ImageHost(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ImageHost(e.to_string()))?;
        if status != reqwest::StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "image upload rejected by host");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        let link = parse_link(&body)?;
        tracing::info!(%link, bytes = image.len(), "image uploaded");
        Ok(link)
    }
}

fn parse_link(body: &str) -> Result<String, AppError> {
    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|e| AppError::ImageHost(format!("unexpected upload response: {}", e)))?;
    Ok(parsed.data.link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_read_from_data() {
        let body = r#"{"data":{"id":"abc","link":"https://i.imgur.com/abc.png"},"success":true,"status":200}"#;
        assert_eq!(parse_link(body).unwrap(), "https://i.imgur.com/abc.png");
    }

    #[test]
    fn body_without_link_is_an_internal_error() {
        let err = parse_link(r#"{"data":{"error":"nope"}}"#).unwrap_err();
        assert!(matches!(err, AppError::ImageHost(_)));
    }

    #[tokio::test]
    async fn upload_without_client_id_is_refused() {
        let client = ImgurClient::new(ImageHostConfig {
            endpoint: "http://127.0.0.1:9/upload".into(),
            client_id: None,
            timeout: std::time::Duration::from_secs(1),
        })
        .unwrap();
        let err = client.upload(vec![1, 2, 3]).await.unwrap_err();
        assert!(matches!(err, AppError::ImageHost(_)));
    }
}
