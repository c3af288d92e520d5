//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use polls_common::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// JSON request body.
///
/// Unlike [`axum::Json`] this ignores the `Content-Type` header and reports
/// every failure as a 400: unparseable input as "Invalid JSON", and missing
/// fields or wrong types as "Missing data".
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        parse_json(&bytes).map(Self)
    }
}

fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> AppResult<T> {
    serde_json::from_slice(bytes).map_err(|e| match e.classify() {
        Category::Data => AppError::Validation(format!("Missing data: {e}")),
        Category::Syntax | Category::Eof | Category::Io => {
            AppError::BadRequest("Invalid JSON".to_string())
        }
    })
}
