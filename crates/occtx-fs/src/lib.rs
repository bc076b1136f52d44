//! Filesystem layer for occtx
//!
//! Provides scope-aware path resolution and safe I/O operations.

pub mod constants;
pub mod error;
pub mod io;
pub mod json;
pub mod layout;

pub use constants::{CONTEXT_EXTENSIONS, OcctxPath};
pub use error::{Error, Result};
pub use layout::{Paths, Scope, ScopePaths, is_context_entry};
