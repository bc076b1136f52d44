//! Fixed file and directory names used by occtx.

use std::path::Path;

/// Well-known names that make up the occtx on-disk layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcctxPath {
    /// `.config/opencode` under the home directory (global root)
    GlobalConfigDir,
    /// `opencode` under the working directory (project root)
    ProjectConfigDir,
    /// `settings` under either root, where contexts are stored
    SettingsDir,
    /// `opencode.json`, the file opencode reads as its live settings
    ActiveConfig,
    /// `.occtx-state.json`, the hidden current/previous record
    StateFile,
}

impl OcctxPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GlobalConfigDir => ".config/opencode",
            Self::ProjectConfigDir => "opencode",
            Self::SettingsDir => "settings",
            Self::ActiveConfig => "opencode.json",
            Self::StateFile => ".occtx-state.json",
        }
    }
}

impl AsRef<Path> for OcctxPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for OcctxPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for OcctxPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File extensions (without the dot) that mark a file as a saved context.
pub const CONTEXT_EXTENSIONS: [&str; 2] = ["json", "jsonc"];
