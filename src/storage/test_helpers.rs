//! Shared test helpers for storage module tests.

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use crate::storage::models::BookInput;
use crate::storage::run_migrations;

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database on a single connection so every query sees
/// the same schema and data.
pub async fn create_test_pool() -> Arc<Pool<Sqlite>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    Arc::new(pool)
}

/// A valid book input with the given title.
pub fn sample_input(title: &str) -> BookInput {
    BookInput {
        title: title.to_string(),
        author: "Test Author".to_string(),
        year: 1999,
        description: Some("A book used in tests".to_string()),
        isbn: Some("978-0-00-000000-0".to_string()),
        genre: None,
    }
}
