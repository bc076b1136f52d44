//! Context manager: sequences context-file and state-file mutations
//!
//! Every operation that touches both a context (or the active config) and
//! the state file mutates the file first and persists state last. A failure
//! part-way therefore leaves the state describing the pre-operation world.

use std::path::Path;

use crate::{Context, ContextFormat, ContextRepository, Error, ErrorKind, Result, State, validate_name};
use occtx_fs::{Paths, Scope, io};

/// Entry point for all context operations within one scope.
#[derive(Debug, Clone)]
pub struct ContextManager {
    paths: Paths,
    scope: Scope,
}

impl ContextManager {
    pub fn new(paths: Paths, scope: Scope) -> Self {
        Self { paths, scope }
    }

    /// Build a manager from the platform home and working directories.
    pub fn from_env(scope: Scope) -> Result<Self> {
        Ok(Self::new(Paths::resolve()?, scope))
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The same paths, viewed from another scope.
    pub fn with_scope(&self, scope: Scope) -> Self {
        Self::new(self.paths.clone(), scope)
    }

    pub fn repository(&self) -> ContextRepository {
        ContextRepository::new(self.paths.contexts_dir(self.scope))
    }

    pub fn active_config(&self) -> &Path {
        self.paths.active_config(self.scope)
    }

    fn state_file(&self) -> &Path {
        self.paths.state_file(self.scope)
    }

    /// Current state record, loaded fresh.
    pub fn state(&self) -> Result<State> {
        State::load(self.state_file())
    }

    /// Name of the active context, if any.
    pub fn current(&self) -> Result<Option<String>> {
        Ok(self.state()?.current().map(str::to_string))
    }

    pub fn list_all(&self) -> Result<Vec<Context>> {
        self.repository().list()
    }

    pub fn get(&self, name: &str) -> Result<Context> {
        self.repository().get(name)
    }

    pub fn read_raw(&self, name: &str) -> Result<Vec<u8>> {
        self.repository().read_raw(name)
    }

    /// Whether the other scope (or this one) has any saved contexts.
    pub fn has_contexts(&self, scope: Scope) -> bool {
        self.paths.has_contexts(scope)
    }

    /// Copy a context over the active config and record it as current.
    pub fn switch(&self, name: &str) -> Result<Context> {
        let (context, raw) = self.repository().load(name)?;

        io::write_atomic(self.active_config(), &raw)?;

        let mut state = self.state()?;
        state.set_current(name);
        state.save(self.state_file())?;

        tracing::info!(name, scope = %self.scope, "switched context");
        Ok(context)
    }

    /// Switch back to the previously active context.
    ///
    /// The persisted state is left untouched when the previous context no
    /// longer exists.
    pub fn switch_to_previous(&self) -> Result<String> {
        let mut state = self.state()?;
        if !state.swap_to_previous() {
            return Err(Error::NoPreviousContext);
        }
        let target = state.current;

        match self.switch(&target) {
            Ok(_) => Ok(target),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::InvalidName) => {
                Err(Error::StalePrevious { name: target })
            }
            Err(e) => Err(e),
        }
    }

    /// Save the active config as a new context.
    pub fn create(&self, name: &str, format: ContextFormat) -> Result<Context> {
        validate_name(name)?;
        self.paths.ensure_directories(self.scope)?;
        self.repository().create(name, format, self.active_config())
    }

    /// Save caller-provided JSON as a new plain JSON context.
    pub fn import(&self, name: &str, input: &[u8]) -> Result<Context> {
        validate_name(name)?;
        self.paths.ensure_directories(self.scope)?;
        self.repository().import(name, input)
    }

    /// Delete a context unless it is the current one.
    pub fn delete(&self, name: &str) -> Result<Context> {
        validate_name(name)?;
        let state = self.state()?;
        if state.current() == Some(name) {
            return Err(Error::CurrentContextProtected {
                name: name.to_string(),
            });
        }
        self.repository().delete(name)
    }

    /// Rename a context and repoint state references to it.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<Context> {
        let renamed = self.repository().rename(old_name, new_name)?;

        let mut state = self.state()?;
        if state.rename_references(old_name, new_name) {
            state.save(self.state_file())?;
        }
        Ok(renamed)
    }

    /// Remove the active config and clear the current context.
    ///
    /// Returns whether an active config file was present.
    pub fn unset(&self) -> Result<bool> {
        let removed = io::remove_if_exists(self.active_config())?;

        let mut state = self.state()?;
        state.unset();
        state.save(self.state_file())?;

        tracing::info!(scope = %self.scope, removed, "unset current context");
        Ok(removed)
    }
}
