#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the Quill tools.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once to
//! install a subscriber. `RUST_LOG` directives take precedence over the
//! configured level.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not one of trace, debug, info, warn, error, off
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
    /// The log file could not be created
    #[error("Failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),
    /// A global subscriber was already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the event filter for `level`, letting `RUST_LOG` override it.
pub fn env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let default: LevelFilter =
        level.trim().parse().map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;
    Ok(EnvFilter::builder().with_default_directive(default.into()).from_env_lossy())
}

/// Install the global subscriber.
///
/// Events go to `file` when given (without ANSI colors), to stderr otherwise.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let filter = env_filter(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
