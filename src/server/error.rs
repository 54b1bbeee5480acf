//! HTTP error responses.
//!
//! Every handler failure is an [`ApiError`], rendered as a status code plus a
//! JSON body. Internal details are logged by the handler and never echoed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::server::types::{ErrorResponse, FieldError, ValidationErrorResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    /// 400 with a free-form message
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 400 listing each rejected field
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// 404
    #[error("not found: {0}")]
    NotFound(String),

    /// 500; the message is a fixed, client-safe summary
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_json() -> Self {
        ApiError::BadRequest("Invalid JSON format".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => (
                status,
                Json(ValidationErrorResponse {
                    error: "Validation Error".to_string(),
                    errors,
                }),
            )
                .into_response(),
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::Internal(message) => (
                status,
                Json(ErrorResponse {
                    error: status
                        .canonical_reason()
                        .unwrap_or("Error")
                        .to_string(),
                    message: Some(message),
                }),
            )
                .into_response(),
        }
    }
}
