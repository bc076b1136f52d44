//! JSON document loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Serialize a value as two-space-indented JSON.
pub fn to_pretty_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| Error::JsonSerialize {
        message: e.to_string(),
    })
}

/// Load and deserialize a JSON file.
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_bytes(path)?;
    serde_json::from_slice(&content).map_err(|e| Error::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a value as pretty JSON and write it atomically.
pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = to_pretty_bytes(value)?;
    io::write_atomic(path, &content)
}
