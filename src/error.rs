//! Error types for the lexalign library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexalignError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexalign::error::{LexalignError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(LexalignError::resource_unavailable("WordNet is still loading"))
//! }
//!
//! match lookup() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexalign operations.
#[derive(Error, Debug)]
pub enum LexalignError {
    /// The lexical knowledge base cannot be queried (missing, not loaded yet).
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Input rejected by validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed lexical database content (index or data lines).
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexalignError.
pub type Result<T> = std::result::Result<T, LexalignError>;

impl LexalignError {
    /// Create a new resource unavailable error.
    pub fn resource_unavailable<S: Into<String>>(msg: S) -> Self {
        LexalignError::ResourceUnavailable(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexalignError::InvalidInput(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LexalignError::Lexicon(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexalignError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexalignError::Other(msg.into())
    }

    /// Whether the error means the knowledge base could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LexalignError::ResourceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexalignError::resource_unavailable("wordnet not loaded");
        assert_eq!(
            error.to_string(),
            "Resource unavailable: wordnet not loaded"
        );
        assert!(error.is_unavailable());

        let error = LexalignError::invalid_input("empty word");
        assert_eq!(error.to_string(), "Invalid input: empty word");
        assert!(!error.is_unavailable());

        let error = LexalignError::lexicon("bad offset");
        assert_eq!(error.to_string(), "Lexicon error: bad offset");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexalignError::from(io_error);

        match error {
            LexalignError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
