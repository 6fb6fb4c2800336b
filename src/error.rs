//! Error types for kt-package-fix.
//!
//! All operations return `Result<T>` which aliases `Result<T, FixError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from a fix run.
///
/// Every variant is fatal: the run stops at the first one, possibly after
/// some files have already been rewritten.
#[derive(Debug, Error)]
pub enum FixError {
    /// The root directory could not be walked.
    #[error("Cannot scan '{}': {reason}", root.display())]
    Discovery { root: PathBuf, reason: String },

    /// A candidate file could not be read (missing, permissions, not UTF-8).
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rewritten file could not be written back.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Identifier or extension rejected before the run started.
    #[error("Invalid identifier '{0}': {1}")]
    InvalidIdentifier(String, String),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for kt-package-fix operations.
pub type Result<T> = std::result::Result<T, FixError>;
