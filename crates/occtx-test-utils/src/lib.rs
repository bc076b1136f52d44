//! Sandboxed home and project directories for occtx tests.
//!
//! A [`Sandbox`] owns a temp directory with a fake home and a fake project
//! working directory inside it, so tests never see the real `~/.config`.

use std::fs;
use std::path::{Path, PathBuf};

use occtx_fs::{Paths, Scope};
use serde_json::{Value, json};
use tempfile::TempDir;

/// A throwaway home + project pair.
pub struct Sandbox {
    _temp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl Sandbox {
    /// Create empty `home/` and `project/` directories.
    ///
    /// # Panics
    /// Panics if the temp directory cannot be created.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap_or_else(|e| panic!("Sandbox::new: tempdir failed: {e}"));
        let home = temp.path().join("home");
        let project = temp.path().join("project");
        for dir in [&home, &project] {
            fs::create_dir_all(dir)
                .unwrap_or_else(|e| panic!("Sandbox::new: failed to create {}: {e}", dir.display()));
        }
        Self {
            _temp: temp,
            home,
            project,
        }
    }

    /// Paths rooted in this sandbox.
    pub fn paths(&self) -> Paths {
        Paths::from_roots(&self.home, &self.project)
    }

    /// Write `value` as the active config for `scope`.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_active(&self, scope: Scope, value: &Value) {
        let text = serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| panic!("write_active: serialize failed: {e}"));
        self.write_active_raw(scope, &text);
    }

    /// Write raw text as the active config for `scope`.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_active_raw(&self, scope: Scope, text: &str) {
        let paths = self.paths();
        let path = paths.active_config(scope);
        write_file(path, text);
    }

    /// Parse the active config for `scope`.
    ///
    /// # Panics
    /// Panics if the file is missing or not JSON.
    pub fn read_active(&self, scope: Scope) -> Value {
        let paths = self.paths();
        let path = paths.active_config(scope);
        let text = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("read_active: {}: {e}", path.display()));
        serde_json::from_str(&text).unwrap_or_else(|e| panic!("read_active: invalid JSON: {e}"))
    }

    /// Drop a file straight into the contexts directory of `scope`.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_context_file(&self, scope: Scope, file_name: &str, text: &str) -> PathBuf {
        let path = self.paths().contexts_dir(scope).join(file_name);
        write_file(&path, text);
        path
    }

    /// File names currently in the contexts directory of `scope`, sorted.
    pub fn context_dir_entries(&self, scope: Scope) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.paths().contexts_dir(scope)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", parent.display()));
    }
    fs::write(path, text).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}

/// A realistic opencode configuration.
pub fn sample_config() -> Value {
    json!({
        "theme": "default",
        "provider": {
            "anthropic": {
                "api": "https://api.anthropic.com",
                "options": {
                    "apiKey": "test-key",
                    "timeout": 30000
                }
            }
        },
        "agent": {
            "default": {
                "provider": "anthropic",
                "model": "claude-4-sonnet"
            }
        }
    })
}
