//! Error types for the levdist library.
//!
//! All failures are represented by the [`LevdistError`] enum, which keeps
//! one variant per error kind so callers can react to (and exit with) a
//! specific reason.
//!
//! # Examples
//!
//! ```
//! use levdist::error::{LevdistError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(LevdistError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for levdist operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for specific error kinds.
#[derive(Error, Debug)]
pub enum LevdistError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A named input could not be opened or read.
    #[error("cannot read sequence from '{path}': {source}")]
    ResourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A prefix length exceeded the actual sequence length.
    #[error("prefix length {requested} exceeds sequence length {actual}")]
    PrefixOutOfBounds { requested: usize, actual: usize },

    /// Resource exhausted
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

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

/// Result type alias for operations that may fail with LevdistError.
pub type Result<T> = std::result::Result<T, LevdistError>;

impl LevdistError {
    /// Create a new resource-unavailable error for the given path.
    pub fn resource_unavailable<S: Into<String>>(path: S, source: io::Error) -> Self {
        LevdistError::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a new prefix-out-of-bounds error.
    pub fn prefix_out_of_bounds(requested: usize, actual: usize) -> Self {
        LevdistError::PrefixOutOfBounds { requested, actual }
    }

    /// Create a new resource-exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        LevdistError::ResourceExhausted(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LevdistError::InvalidArgument(msg.into())
    }

    /// Process exit code for this error kind.
    ///
    /// Usage errors exit with 2 via clap before any of these are reached.
    pub fn exit_code(&self) -> i32 {
        match self {
            LevdistError::Io(_) | LevdistError::ResourceUnavailable { .. } => 66,
            LevdistError::PrefixOutOfBounds { .. } | LevdistError::InvalidArgument(_) => 70,
            LevdistError::ResourceExhausted(_) => 71,
            LevdistError::Json(_) | LevdistError::Anyhow(_) => 1,
        }
    }
}
