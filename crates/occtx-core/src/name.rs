//! Context name validation

use crate::{Error, Result};

/// Check that a context name is safe to use as a file stem.
///
/// Rejects empty names, `.` and `..`, names containing `/` or `\`, and
/// names starting with `.` (which also keeps the hidden state file out of
/// the context namespace).
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "context name cannot be empty"
    } else if name.contains('/') || name.contains('\\') {
        "context name cannot contain path separators"
    } else if name == "." || name == ".." {
        "context name cannot be '.' or '..'"
    } else if name.starts_with('.') {
        "context name cannot start with '.'"
    } else {
        return Ok(());
    };

    Err(Error::InvalidName {
        name: name.to_string(),
        reason,
    })
}
