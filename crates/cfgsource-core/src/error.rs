//! Error types for cfgsource

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Construction errors
    #[error("Root path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Root path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    // Per-call errors
    #[error("Failed to read '{key}': {source}")]
    ReadFailure {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to enumerate {}: {source}", path.display())]
    EnumerationFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The I/O error class behind this error, if it wraps one.
    ///
    /// Lets callers tell "not found" apart from "permission denied" and
    /// other failures without matching on every variant.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::ReadFailure { source, .. } | Error::EnumerationFailure { source, .. } => {
                Some(source.kind())
            }
            Error::Io(e) => Some(e.kind()),
            Error::NotFound { .. } => Some(io::ErrorKind::NotFound),
            Error::NotADirectory { .. } => Some(io::ErrorKind::NotADirectory),
            Error::Config(_) | Error::Internal(_) => None,
        }
    }

    /// True when the error means the target does not exist.
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
