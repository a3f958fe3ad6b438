//! Client-facing errors and the JSON body extractor.

use api_shared::ErrorRes;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;

/// Errors a handler reports to the client as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), "request rejected: {}", self);
        (
            status,
            Json(ErrorRes {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// JSON request body.
///
/// Unlike `axum::Json`, this ignores the `Content-Type` header and turns every failure
/// (unreadable body, invalid JSON, missing or mistyped field) into [`ApiError::BadRequest`].
/// The body must be a JSON object: serde would otherwise fill a struct from an array by
/// position.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        if !value.is_object() {
            return Err(ApiError::BadRequest(
                "request body must be a JSON object".into(),
            ));
        }

        serde_json::from_value(value)
            .map(ApiJson)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}
