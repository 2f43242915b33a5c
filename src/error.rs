//! Error types for dolla.
//!
//! Parse failures are not errors in this sense: they are reported through
//! [`crate::report::ErrorReporter`] and become [`crate::parser::Command::Error`].
//! `DollaError` covers everything around the parse pipeline.

use thiserror::Error;

/// Errors raised outside the parse pipeline.
#[derive(Debug, Error)]
pub enum DollaError {
    /// Configuration could not be located, read, or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of a command failed.
    #[error("serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}
