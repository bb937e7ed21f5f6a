//! Error types for the Doxa library.
//!
//! All errors are represented by the [`DoxaError`] enum. Numeric degeneracies
//! during scoring (division by zero, log of zero) are deliberately *not*
//! errors; they propagate as non-finite floating-point values.
//!
//! # Examples
//!
//! ```
//! use doxa::error::{DoxaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DoxaError::unknown_category("sports"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Doxa operations.
#[derive(Error, Debug)]
pub enum DoxaError {
    /// A category referenced by train/untrain is not in the registry
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Classification was requested with no registered categories
    #[error("No categories are registered")]
    EmptyRegistry,

    /// Analysis-related errors (tokenization, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// An operation name that does not resolve to any known operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with DoxaError.
pub type Result<T> = std::result::Result<T, DoxaError>;

impl DoxaError {
    /// Create a new unknown category error.
    pub fn unknown_category<S: Into<String>>(name: S) -> Self {
        DoxaError::UnknownCategory(name.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DoxaError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(name: S) -> Self {
        DoxaError::InvalidOperation(name.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DoxaError::Other(msg.into())
    }
}
