//! library_api: book records and URL normalization over HTTP
//!
//! This library provides a small JSON API with two independent parts:
//! - CRUD endpoints for book records stored in SQLite
//! - a stateless URL normalizer (`canonical`, `redirection`, `all`)
//!
//! The normalizer is usable on its own:
//!
//! ```
//! use library_api::normalize::process;
//!
//! let url = process("https://ANY.com/SOME/PATH?Q=V", "redirection").unwrap();
//! assert_eq!(url, "https://www.byfood.com/some/path?q=v");
//! ```
//!
//! # Example
//!
//! ```no_run
//! use library_api::{serve, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 3000,
//!     ..Default::default()
//! };
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `serve` requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling it within an async context.

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod normalize;
pub mod server;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Mode};
pub use run::serve;
pub use server::{build_router, start_server, AppState};
pub use storage::{init_db_pool_with_path, run_migrations};

// Internal run module (wires configuration, storage and the HTTP server)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::server::{start_server, AppState};
    use crate::storage::{init_db_pool_with_path, run_migrations};

    /// Runs the API server with the provided configuration.
    ///
    /// Validates the configuration, opens (or creates) the SQLite database,
    /// applies migrations, binds the listener and serves until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the database cannot
    /// be opened or migrated, the address cannot be bound, or the server fails.
    pub async fn serve(config: Config) -> Result<()> {
        config.validate().context("Invalid configuration")?;

        info!("Opening database {}", config.db_path.display());
        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let addr = config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind server to {}", addr))?;

        start_server(listener, AppState::new(pool)).await?;

        Ok(())
    }
}
