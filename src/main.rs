//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `library_api` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use library_api::initialization::{init_logger_with, load_dotenv};
use library_api::{serve, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before parsing so clap sees its variables
    load_dotenv();

    let config = Config::parse();

    init_logger_with(config.effective_log_level(), config.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = serve(config).await {
        eprintln!("library_api error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
