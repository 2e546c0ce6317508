//! Error types for Searchbox
//!
//! The filter widget itself cannot fail; these cover the terminal,
//! the log file and command-line configuration.

use thiserror::Error;

/// Main error type for Searchbox operations
#[derive(Error, Debug)]
pub enum SearchBoxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for Searchbox operations
pub type Result<T> = std::result::Result<T, SearchBoxError>;

impl SearchBoxError {
    /// Create a configuration error for a command-line option
    pub fn invalid_option(option: &str, reason: impl std::fmt::Display) -> Self {
        SearchBoxError::InvalidConfig(format!("{}: {}", option, reason))
    }
}
