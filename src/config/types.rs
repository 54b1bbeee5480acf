//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option can also be set through an environment
//! variable (or a `.env` file loaded at startup).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::constants::{DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for log shippers
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Server run mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Raises logging to at least debug level
    Debug,
    /// Uses the configured log level as is
    Production,
}

/// Server configuration.
///
/// Parsed from the command line with environment variable fallbacks, or built
/// programmatically for tests and embedding.
///
/// # Examples
///
/// ```no_run
/// use library_api::Config;
///
/// let config = Config {
///     port: 9000,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "library_api",
    version,
    about = "Book records and URL normalization over HTTP"
)]
pub struct Config {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "SERVER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database path (SQLite file)
    #[arg(long, env = "DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Run mode
    #[arg(long, env = "APP_MODE", value_enum, default_value_t = Mode::Debug)]
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            mode: Mode::Debug,
        }
    }
}

impl Config {
    /// Checks settings that clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns the first offending field with a message describing the
    /// accepted values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.host.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "host",
                message: "must not be empty (e.g. 0.0.0.0 or 127.0.0.1)".to_string(),
            });
        }
        if self.port == 0 {
            return Err(ConfigValidationError {
                field: "port",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "db_path",
                message: "must point to a SQLite file (e.g. ./library.db)".to_string(),
            });
        }
        Ok(())
    }

    /// Log level after applying the run mode.
    pub fn effective_log_level(&self) -> LevelFilter {
        let level = LevelFilter::from(self.log_level);
        match self.mode {
            Mode::Debug => level.max(LevelFilter::Debug),
            Mode::Production => level,
        }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
