//! Shared handler state.

use std::sync::Arc;

use sqlx::{Pool, Sqlite};

use crate::storage::BookStore;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub books: BookStore,
}

impl AppState {
    pub fn new(pool: Arc<Pool<Sqlite>>) -> Self {
        Self {
            books: BookStore::new(pool),
        }
    }
}
