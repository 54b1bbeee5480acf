//! HTTP handlers.

mod books;
mod health;
mod url;

pub use books::{create_book, delete_book, get_book, list_books, update_book};
pub use health::health;
pub use url::process_url;
