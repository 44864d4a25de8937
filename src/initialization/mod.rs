//! Application initialization: logger and HTTP client setup.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;

use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
