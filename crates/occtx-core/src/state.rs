//! Two-slot current/previous history
//!
//! The state file is advisory: it records which context was switched to
//! last and which one before that. It is loaded fresh for every operation
//! and never treated as the source of truth for whether a context exists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// The current/previous record persisted in `.occtx-state.json`.
///
/// Empty strings mean "none" and are omitted from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub previous: String,
}

impl State {
    /// Load state from a file.
    ///
    /// A missing file, or one that does not parse as a state record, yields
    /// the empty state.
    pub fn load(path: &Path) -> Result<Self> {
        match occtx_fs::json::read::<State>(path) {
            Ok(state) => Ok(state),
            Err(e) if e.is_not_found() => Ok(Self::default()),
            Err(occtx_fs::Error::JsonParse { message, .. }) => {
                tracing::warn!(path = %path.display(), %message, "ignoring unreadable state file");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Save state atomically, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        occtx_fs::json::write_pretty(path, self)?;
        tracing::debug!(path = %path.display(), current = %self.current, previous = %self.previous, "state saved");
        Ok(())
    }

    /// Current context name, if any.
    pub fn current(&self) -> Option<&str> {
        Some(self.current.as_str()).filter(|s| !s.is_empty())
    }

    /// Previous context name, if any.
    pub fn previous(&self) -> Option<&str> {
        Some(self.previous.as_str()).filter(|s| !s.is_empty())
    }

    /// Make `name` current, remembering the old current as previous.
    pub fn set_current(&mut self, name: impl Into<String>) {
        self.previous = std::mem::take(&mut self.current);
        self.current = name.into();
    }

    /// Clear current, remembering it as previous.
    pub fn unset(&mut self) {
        self.previous = std::mem::take(&mut self.current);
    }

    /// Exchange current and previous.
    ///
    /// Returns `false` and leaves the state unchanged when there is no
    /// previous context.
    pub fn swap_to_previous(&mut self) -> bool {
        if self.previous.is_empty() {
            return false;
        }
        std::mem::swap(&mut self.current, &mut self.previous);
        true
    }

    /// Point any reference to `old` at `new`. Returns whether anything changed.
    pub fn rename_references(&mut self, old: &str, new: &str) -> bool {
        let mut updated = false;
        for slot in [&mut self.current, &mut self.previous] {
            if *slot == old {
                *slot = new.to_string();
                updated = true;
            }
        }
        updated
    }
}
