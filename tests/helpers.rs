// Shared test helpers for spinning up the API against a throwaway database.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;

use library_api::{build_router, init_db_pool_with_path, run_migrations, AppState};

/// A running server bound to an ephemeral port.
///
/// The temporary directory holding the SQLite file lives as long as this value.
#[allow(dead_code)] // Used by other test files
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    _dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Creates a migrated on-disk database under `dir` and returns its state.
#[allow(dead_code)]
pub async fn create_test_state(dir: &Path) -> AppState {
    let pool = init_db_pool_with_path(&dir.join("test.db"))
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    AppState::new(pool)
}

/// Starts the full router (middleware included) on `127.0.0.1:0`.
#[allow(dead_code)]
pub async fn spawn_server() -> TestServer {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let state = create_test_state(dir.path()).await;

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let app = build_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        _dir: dir,
    }
}

/// A book body that passes validation.
#[allow(dead_code)]
pub fn valid_book_json(title: &str) -> Value {
    json!({
        "title": title,
        "author": "Ursula K. Le Guin",
        "year": 1969,
        "description": "A novel about Gethen",
        "genre": "Science Fiction"
    })
}
