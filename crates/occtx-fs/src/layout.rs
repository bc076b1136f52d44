//! Scope-aware path resolution
//!
//! occtx keeps two parallel sets of locations: a global set under the user's
//! home directory and a project set under the working directory. A [`Scope`]
//! selects which set an operation uses.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONTEXT_EXTENSIONS, OcctxPath};
use crate::{Error, Result, io};

/// Which of the two path sets an operation works against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// User-level contexts under `~/.config/opencode`
    #[default]
    Global,
    /// Project-level contexts under `./opencode`
    Project,
}

impl Scope {
    /// Pick a scope from the `--in-project` style boolean.
    pub fn from_project_flag(in_project: bool) -> Self {
        if in_project { Self::Project } else { Self::Global }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Project => "project",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four canonical locations for one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopePaths {
    /// Root directory of the scope
    pub config_dir: PathBuf,
    /// Directory holding saved contexts
    pub contexts_dir: PathBuf,
    /// The live configuration file
    pub active_config: PathBuf,
    /// Hidden current/previous record
    pub state_file: PathBuf,
}

/// All occtx locations, computed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    global: ScopePaths,
    project: ScopePaths,
}

impl Paths {
    /// Resolve paths from the platform home directory and the current
    /// working directory.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::Resolution {
            what: "home",
            source: None,
        })?;
        let cwd = std::env::current_dir().map_err(|e| Error::Resolution {
            what: "working",
            source: Some(e),
        })?;
        Ok(Self::from_roots(home, cwd))
    }

    /// Build the layout from explicit home and working directories.
    pub fn from_roots(home: impl AsRef<Path>, cwd: impl AsRef<Path>) -> Self {
        let home = home.as_ref();
        let cwd = cwd.as_ref();

        let global_root = home.join(OcctxPath::GlobalConfigDir);
        let global_settings = global_root.join(OcctxPath::SettingsDir);
        let global = ScopePaths {
            active_config: global_root.join(OcctxPath::ActiveConfig),
            state_file: global_settings.join(OcctxPath::StateFile),
            contexts_dir: global_settings,
            config_dir: global_root,
        };

        let project_root = cwd.join(OcctxPath::ProjectConfigDir);
        let project_settings = project_root.join(OcctxPath::SettingsDir);
        let project = ScopePaths {
            // The live file sits at the project top level, not under ./opencode
            active_config: cwd.join(OcctxPath::ActiveConfig),
            state_file: project_settings.join(OcctxPath::StateFile),
            contexts_dir: project_settings,
            config_dir: project_root,
        };

        Self { global, project }
    }

    /// All four paths for a scope.
    pub fn scope(&self, scope: Scope) -> &ScopePaths {
        match scope {
            Scope::Global => &self.global,
            Scope::Project => &self.project,
        }
    }

    pub fn config_dir(&self, scope: Scope) -> &Path {
        &self.scope(scope).config_dir
    }

    pub fn contexts_dir(&self, scope: Scope) -> &Path {
        &self.scope(scope).contexts_dir
    }

    pub fn active_config(&self, scope: Scope) -> &Path {
        &self.scope(scope).active_config
    }

    pub fn state_file(&self, scope: Scope) -> &Path {
        &self.scope(scope).state_file
    }

    /// Create the root and settings directories for a scope if absent.
    pub fn ensure_directories(&self, scope: Scope) -> Result<()> {
        let paths = self.scope(scope);
        io::ensure_dir(&paths.config_dir)?;
        io::ensure_dir(&paths.contexts_dir)
    }

    /// Whether the scope holds at least one saved context file.
    ///
    /// Only meant for user-facing hints; unreadable directories count as empty.
    pub fn has_contexts(&self, scope: Scope) -> bool {
        let Ok(entries) = fs::read_dir(self.contexts_dir(scope)) else {
            return false;
        };

        entries
            .filter_map(|e| e.ok())
            .any(|entry| is_context_entry(&entry))
    }
}

/// True if a directory entry is a saved context file.
///
/// The name must pass [`is_context_file_name`] and the entry must resolve
/// to a regular file; symlinks are followed, and dangling links or links to
/// directories never count.
pub fn is_context_entry(entry: &fs::DirEntry) -> bool {
    let name = entry.file_name();
    let Some(name) = name.to_str() else {
        return false;
    };
    is_context_file_name(name) && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

/// True if a directory entry name looks like a saved context.
///
/// Hidden files (which includes the state file) never count.
pub fn is_context_file_name(file_name: &str) -> bool {
    if file_name.starts_with('.') || file_name == OcctxPath::StateFile.as_str() {
        return false;
    }
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTEXT_EXTENSIONS.contains(&ext))
}
