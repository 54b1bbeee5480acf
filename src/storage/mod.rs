// storage/mod.rs
// Database operations module

pub mod books;
pub mod migrations;
pub mod models;
pub mod pool;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use books::BookStore;
pub use migrations::run_migrations;
pub use models::{Book, BookInput};
pub use pool::init_db_pool_with_path;
