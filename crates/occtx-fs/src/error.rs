//! Error types for occtx-fs

use std::path::PathBuf;

/// Result type for occtx-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in occtx-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot determine {what} directory")]
    Resolution {
        what: &'static str,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Failed to parse JSON at {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    #[error("Failed to serialize JSON: {message}")]
    JsonSerialize { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True if this is an I/O error whose underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
