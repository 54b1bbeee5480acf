//! HTTP API server.
//!
//! Routes:
//! - `GET/POST /api/books`, `GET/PUT/DELETE /api/books/{id}` - book records
//! - `POST /api/url-process` - URL normalization
//! - `GET /health` - liveness
//!
//! Every request passes through the logging middleware and a permissive CORS layer.

mod error;
mod handlers;
mod middleware;
mod state;
pub mod types;
mod validation;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{
    create_book, delete_book, get_book, health, list_books, process_url, update_book,
};
pub use error::ApiError;
pub use state::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/url-process", post(process_url));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(middleware::cors_layer())
        .with_state(state)
}

/// Serves the API on `listener` until Ctrl-C is received.
pub async fn start_server(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    let addr = listener.local_addr()?;
    log::info!("Server listening on http://{}/", addr);
    log::info!("  - Books: http://{}/api/books", addr);
    log::info!("  - URL processing: http://{}/api/url-process", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler, never resolve so the server keeps running
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, draining connections");
}
