//! JSON body extractor whose rejections go through [`AppError`] like every other failure.

use crate::error::AppError;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but an empty body is reported as "No data provided" and malformed JSON
/// as a 400 in the usual error shape. The content type is not checked.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;
        parse(&bytes).map(JsonBody)
    }
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("No data provided".into()));
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateBudgetRequest;

    #[test]
    fn empty_body_means_no_data() {
        let err = parse::<CreateBudgetRequest>(b"  \n").unwrap_err();
        assert_eq!(err.to_string(), "No data provided");
    }

    #[test]
    fn wrong_types_are_bad_requests() {
        let err = parse::<CreateBudgetRequest>(br#"{"services_ids": ["one"]}"#).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req: CreateBudgetRequest =
            parse(br#"{"customers_name": "Olena", "services_ids": [1, 2], "utm": "x"}"#).unwrap();
        assert_eq!(req.services_ids, Some(vec![1, 2]));
    }
}
