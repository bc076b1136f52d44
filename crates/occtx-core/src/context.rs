//! The saved-context value type

use std::path::PathBuf;

use crate::ContextFormat;

/// Parsed context content: an open JSON object.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// One saved configuration.
///
/// The name is derived from the file name and is the only identity a
/// context has. `data` is only populated by an explicit read.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub name: String,
    pub file_path: PathBuf,
    pub format: ContextFormat,
    pub data: Option<Document>,
}

impl Context {
    pub(crate) fn located(name: impl Into<String>, file_path: PathBuf, format: ContextFormat) -> Self {
        Self {
            name: name.into(),
            file_path,
            format,
            data: None,
        }
    }
}
