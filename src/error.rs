//! Error types for keepours.
//!
//! Uses thiserror for derive macros. File-level variants carry the path they
//! refer to so the walker can report them without extra context.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for keepours operations.
#[derive(Error, Debug)]
pub enum KeepOursError {
    /// The invocation itself is unusable (bad root directory).
    #[error("{0}")]
    UserError(String),

    /// A file could not be opened, read, or written.
    #[error("cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's bytes are not valid UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl KeepOursError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Only `UserError` escapes to `main` in practice; file errors are
    /// consumed by the walker.
    pub fn exit_code(&self) -> i32 {
        match self {
            KeepOursError::UserError(_) => exit_codes::USER_ERROR,
            KeepOursError::FileAccess { .. } => exit_codes::USER_ERROR,
            KeepOursError::Decode { .. } => exit_codes::USER_ERROR,
        }
    }

    /// Progress line for a file that was skipped because of this error.
    ///
    /// File errors read `Error processing <path>: <cause>`; other errors fall
    /// back to `Error: <message>`.
    pub fn format_failure(&self) -> String {
        match self {
            KeepOursError::UserError(msg) => format!("Error: {}", msg),
            KeepOursError::FileAccess { path, source } => {
                format!("Error processing {}: {}", path.display(), source)
            }
            KeepOursError::Decode { path, source } => {
                format!("Error processing {}: {}", path.display(), source)
            }
        }
    }

    /// Path of the file this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            KeepOursError::UserError(_) => None,
            KeepOursError::FileAccess { path, .. } | KeepOursError::Decode { path, .. } => {
                Some(path)
            }
        }
    }
}

/// Result type alias for keepours operations.
pub type Result<T> = std::result::Result<T, KeepOursError>;
