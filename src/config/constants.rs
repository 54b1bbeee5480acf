//! Configuration constants.
//!
//! Defaults for the server, database and field limits used by request validation.

/// Interface the HTTP server binds to by default
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the HTTP server listens on by default
pub const DEFAULT_PORT: u16 = 8080;
/// SQLite database file used when no path is configured
pub const DEFAULT_DB_PATH: &str = "./library.db";

// Book field limits (characters)
pub const TITLE_MAX_LEN: usize = 255;
pub const AUTHOR_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const ISBN_MAX_LEN: usize = 20;
pub const GENRE_MAX_LEN: usize = 100;
/// Earliest publication year accepted for a book
pub const MIN_BOOK_YEAR: i32 = 1000;
