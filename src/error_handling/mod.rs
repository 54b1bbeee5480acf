//! Error handling.
//!
//! Error types are grouped by where they surface:
//! - **Startup**: logger, configuration and database setup failures
//! - **Normalization**: rejected URL or operation input
//! - **Storage**: missing records and SQL failures
//!
//! The HTTP layer maps each of these to a status code in `server::error`.

mod types;

// Re-export public API
pub use types::{
    ConfigValidationError, DatabaseError, InitializationError, NormalizeError, StoreError,
};
