//! Context storage and state engine for occtx
//!
//! This crate implements the bookkeeping behind the `occtx` command:
//!
//! - **Formats**: the closed set of on-disk context formats (JSON, JSONC)
//! - **State store**: the two-slot current/previous history file
//! - **Context repository**: list/read/create/delete/rename of named contexts
//!   within one contexts directory
//! - **Context manager**: the orchestrator that sequences file and state
//!   mutations for switch, create, delete, rename and unset
//!
//! # Architecture
//!
//! ```text
//!                 occtx-cli
//!                     |
//!              ContextManager
//!             /       |       \
//!   occtx-fs::Paths  Repository  State
//!                     \       /
//!                    occtx-fs::io
//! ```

pub mod context;
pub mod error;
pub mod format;
pub mod manager;
pub mod name;
pub mod repository;
pub mod state;

pub use context::{Context, Document};
pub use error::{Error, ErrorKind, Result};
pub use format::ContextFormat;
pub use manager::ContextManager;
pub use name::validate_name;
pub use occtx_fs::{Paths, Scope};
pub use repository::ContextRepository;
pub use state::State;
