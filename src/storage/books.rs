//! Book record store.
//!
//! Single-row reads and writes against the `books` table. Each operation is
//! one statement; there is no locking beyond what SQLite provides.

use std::sync::Arc;

use chrono::Utc;
use log::{error, info, warn};
use sqlx::{Pool, Sqlite};

use crate::error_handling::StoreError;
use crate::storage::models::{Book, BookInput, BookRow};

const BOOK_COLUMNS: &str =
    "id, title, author, year, description, isbn, genre, created_at_ms, updated_at_ms";

/// SQLite-backed store for [`Book`] records.
#[derive(Clone)]
pub struct BookStore {
    pool: Arc<Pool<Sqlite>>,
}

impl BookStore {
    pub fn new(pool: Arc<Pool<Sqlite>>) -> Self {
        Self { pool }
    }

    /// Returns every book, newest first.
    pub async fn list(&self) -> Result<Vec<Book>, StoreError> {
        info!("Fetching all books");

        let rows: Vec<BookRow> = sqlx::query_as(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at_ms DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to query books: {e}");
            StoreError::from(e)
        })?;

        info!("Fetched {} books", rows.len());
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Returns the book with `id`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no such book exists.
    pub async fn get(&self, id: i64) -> Result<Book, StoreError> {
        info!("Fetching book {id}");

        let row: Option<BookRow> =
            sqlx::query_as(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(|e| {
                    error!("Failed to fetch book {id}: {e}");
                    StoreError::from(e)
                })?;

        match row {
            Some(row) => Ok(row.into()),
            None => {
                warn!("Book {id} not found");
                Err(StoreError::NotFound(id.to_string()))
            }
        }
    }

    /// Inserts a new book and returns it with its assigned id and timestamps.
    pub async fn create(&self, input: &BookInput) -> Result<Book, StoreError> {
        info!("Creating book {:?}", input.title);

        let now_ms = Utc::now().timestamp_millis();
        let row: BookRow = sqlx::query_as(&format!(
            "INSERT INTO books (
                title, author, year, description, isbn, genre, created_at_ms, updated_at_ms
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {BOOK_COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.year)
        .bind(&input.description)
        .bind(&input.isbn)
        .bind(&input.genre)
        .bind(now_ms)
        .bind(now_ms)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to create book: {e}");
            StoreError::from(e)
        })?;

        info!("Created book {}", row.id);
        Ok(row.into())
    }

    /// Replaces all writable fields of book `id`.
    ///
    /// `created_at` is kept; `updated_at` is set to now.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no such book exists.
    pub async fn update(&self, id: i64, input: &BookInput) -> Result<Book, StoreError> {
        info!("Updating book {id}");

        let now_ms = Utc::now().timestamp_millis();
        let row: Option<BookRow> = sqlx::query_as(&format!(
            "UPDATE books SET
                title = ?, author = ?, year = ?, description = ?, isbn = ?, genre = ?,
                updated_at_ms = ?
            WHERE id = ?
            RETURNING {BOOK_COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.year)
        .bind(&input.description)
        .bind(&input.isbn)
        .bind(&input.genre)
        .bind(now_ms)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to update book {id}: {e}");
            StoreError::from(e)
        })?;

        match row {
            Some(row) => {
                info!("Updated book {id}");
                Ok(row.into())
            }
            None => {
                warn!("Book {id} not found for update");
                Err(StoreError::NotFound(id.to_string()))
            }
        }
    }

    /// Deletes book `id`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no such book exists.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        info!("Deleting book {id}");

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete book {id}: {e}");
                StoreError::from(e)
            })?;

        if result.rows_affected() == 0 {
            warn!("Book {id} not found for deletion");
            return Err(StoreError::NotFound(id.to_string()));
        }

        info!("Deleted book {id}");
        Ok(())
    }
}
