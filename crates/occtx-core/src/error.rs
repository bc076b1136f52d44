//! Error types for occtx-core

use std::path::PathBuf;

use crate::ContextFormat;

/// Result type for occtx-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in occtx-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Context name breaks one of the naming rules
    #[error("Invalid context name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// No file for the named context in the resolved scope
    #[error("Context '{name}' not found")]
    NotFound { name: String },

    /// Create, import or rename target is already taken
    #[error("Context '{name}' already exists ({format} format)")]
    AlreadyExists { name: String, format: ContextFormat },

    /// A stored context is not a well-formed JSON object
    #[error("Invalid JSON in context '{name}': {message}")]
    InvalidContent { name: String, message: String },

    /// The active config (or imported input) cannot be used as a source
    #[error("Invalid source {source_name}: {message}")]
    SourceInvalid {
        source_name: String,
        message: String,
    },

    /// Delete attempted on the context currently marked active
    #[error("Cannot delete current context '{name}'. Switch to another context first")]
    CurrentContextProtected { name: String },

    /// Switch-to-previous with nothing remembered
    #[error("No previous context available")]
    NoPreviousContext,

    /// The remembered previous context has disappeared
    #[error("Previous context '{name}' no longer exists")]
    StalePrevious { name: String },

    /// Unknown format name
    #[error("Invalid format '{value}'. Supported formats: {}", ContextFormat::supported())]
    InvalidFormat { value: String },

    /// Filesystem error from occtx-fs
    #[error(transparent)]
    Fs(#[from] occtx_fs::Error),
}

/// Flat classification of [`Error`], stable across message wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Resolution,
    InvalidName,
    NotFound,
    AlreadyExists,
    InvalidContent,
    SourceInvalid,
    CurrentContextProtected,
    NoPreviousContext,
    StalePrevious,
    InvalidFormat,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName { .. } => ErrorKind::InvalidName,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::InvalidContent { .. } => ErrorKind::InvalidContent,
            Self::SourceInvalid { .. } => ErrorKind::SourceInvalid,
            Self::CurrentContextProtected { .. } => ErrorKind::CurrentContextProtected,
            Self::NoPreviousContext => ErrorKind::NoPreviousContext,
            Self::StalePrevious { .. } => ErrorKind::StalePrevious,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::Fs(occtx_fs::Error::Resolution { .. }) => ErrorKind::Resolution,
            Self::Fs(occtx_fs::Error::JsonParse { .. }) => ErrorKind::InvalidContent,
            Self::Fs(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn source_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SourceInvalid {
            source_name: path.into().display().to_string(),
            message: message.into(),
        }
    }
}
