//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/url-process`.
///
/// Missing fields deserialize to empty strings and are reported by validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UrlProcessRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub operation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UrlProcessResponse {
    pub processed_url: String,
}

/// Generic error body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Body returned when request validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
