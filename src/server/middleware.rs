//! Request logging and CORS.

use std::time::Instant;

use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;
use log::info;
use tower_http::cors::{Any, CorsLayer};

/// Logs method, path, status, latency and user agent for every request.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} in {:.2?} (user_agent: {})",
        method,
        path,
        response.status().as_u16(),
        start.elapsed(),
        user_agent
    );
    response
}

/// Allows any origin to call the API with the methods it serves.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
