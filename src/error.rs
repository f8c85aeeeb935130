//! Error types for the rusbasic library.
//!
//! Parsing itself never fails on valid text; errors come from the boundary:
//! building matchers from alphabet tables, loading phrase lists and
//! configuration files, and CLI I/O. All of them are represented by the
//! [`RusbasicError`] enum.
//!
//! # Examples
//!
//! ```
//! use rusbasic::error::{RusbasicError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RusbasicError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for rusbasic operations.
#[derive(Error, Debug)]
pub enum RusbasicError {
    /// I/O errors (phrase files, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (segmenter construction, char filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Phrase index errors (loading, freezing)
    #[error("Phrase error: {0}")]
    Phrase(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RusbasicError.
pub type Result<T> = std::result::Result<T, RusbasicError>;

impl RusbasicError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RusbasicError::Analysis(msg.into())
    }

    /// Create a new phrase error.
    pub fn phrase<S: Into<String>>(msg: S) -> Self {
        RusbasicError::Phrase(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RusbasicError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RusbasicError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RusbasicError::analysis("bad alphabet");
        assert_eq!(error.to_string(), "Analysis error: bad alphabet");

        let error = RusbasicError::phrase("empty file");
        assert_eq!(error.to_string(), "Phrase error: empty file");

        let error = RusbasicError::config("missing field");
        assert_eq!(error.to_string(), "Config error: missing field");

        let error = RusbasicError::invalid_argument("no input");
        assert_eq!(error.to_string(), "Invalid argument: no input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = RusbasicError::from(io_error);

        match error {
            RusbasicError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
