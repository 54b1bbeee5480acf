//! Book CRUD handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::{debug, error};

use crate::error_handling::StoreError;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::validation::validate_book_input;
use crate::storage::{Book, BookInput};

const BOOK_NOT_FOUND: &str = "Book not found";

/// `GET /api/books`
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state
        .books
        .list()
        .await
        .map_err(|e| store_failure(e, "Failed to retrieve books"))?;
    Ok(Json(books))
}

/// `GET /api/books/{id}`
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    let book = state
        .books
        .get(id)
        .await
        .map_err(|e| store_failure(e, "Failed to retrieve book"))?;
    Ok(Json(book))
}

/// `POST /api/books`
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let input = read_input(payload)?;
    let book = state
        .books
        .create(&input)
        .await
        .map_err(|e| store_failure(e, "Failed to create book"))?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// `PUT /api/books/{id}`
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let input = read_input(payload)?;
    let id = parse_id(&id)?;
    let book = state
        .books
        .update(id, &input)
        .await
        .map_err(|e| store_failure(e, "Failed to update book"))?;
    Ok(Json(book))
}

/// `DELETE /api/books/{id}`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state
        .books
        .delete(id)
        .await
        .map_err(|e| store_failure(e, "Failed to delete book"))?;
    Ok(StatusCode::NO_CONTENT)
}

// Ids are integers; anything else cannot name a stored book.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(BOOK_NOT_FOUND.to_string()))
}

fn read_input(payload: Result<Json<BookInput>, JsonRejection>) -> Result<BookInput, ApiError> {
    let Json(input) = payload.map_err(|e| {
        debug!("Rejected book body: {e}");
        ApiError::invalid_json()
    })?;
    validate_book_input(&input).map_err(ApiError::Validation)?;
    Ok(input)
}

fn store_failure(err: StoreError, summary: &str) -> ApiError {
    match err {
        StoreError::NotFound(_) => ApiError::NotFound(BOOK_NOT_FOUND.to_string()),
        StoreError::Sql(e) => {
            error!("{summary}: {e}");
            ApiError::Internal(summary.to_string())
        }
    }
}
