//! Application initialization.
//!
//! Sets up process-wide resources before the server starts:
//! - `.env` loading
//! - Logger
//!
//! The database pool lives in `storage` and is created by `serve`.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

/// Loads environment variables from a `.env` file, if one exists.
///
/// Looks in the current directory first, then next to the executable.
/// Variables already set in the environment are never overwritten.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
        }
    }
}
