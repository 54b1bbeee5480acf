//! URL processing handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use log::{debug, info, warn};

use crate::normalize;
use crate::server::error::ApiError;
use crate::server::types::{UrlProcessRequest, UrlProcessResponse};
use crate::server::validation::validate_url_request;

/// `POST /api/url-process`
pub async fn process_url(
    payload: Result<Json<UrlProcessRequest>, JsonRejection>,
) -> Result<Json<UrlProcessResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        debug!("Rejected URL process body: {e}");
        ApiError::invalid_json()
    })?;

    validate_url_request(&req).map_err(ApiError::Validation)?;

    info!("Processing URL {} (operation: {})", req.url, req.operation);

    let processed_url = normalize::process(&req.url, &req.operation).map_err(|e| {
        warn!("Failed to process URL {}: {e}", req.url);
        ApiError::BadRequest(e.to_string())
    })?;

    info!(
        "Processed URL {} -> {} (operation: {})",
        req.url, processed_url, req.operation
    );

    Ok(Json(UrlProcessResponse { processed_url }))
}
