//! Command implementations for occtx-cli
//!
//! Each command writes its user-facing output to the given writer so that
//! `--export` can stream raw bytes and tests can capture what was printed.

pub mod content;
pub mod list;
pub mod manage;
pub mod switch;

use std::io::Write;

use occtx_core::ContextManager;

use crate::cli::Action;
use crate::error::Result;

pub use content::{run_edit, run_export, run_import, run_show};
pub use list::run_list;
pub use manage::{run_create, run_current, run_delete, run_rename, run_unset};
pub use switch::{run_interactive, run_switch, run_switch_previous};

/// Dispatch one parsed action against a scoped manager.
pub fn execute(manager: &ContextManager, action: Action, out: &mut dyn Write) -> Result<()> {
    tracing::debug!(?action, scope = %manager.scope(), "executing");
    match action {
        Action::List => run_list(manager, out),
        Action::Switch(name) => run_switch(manager, &name, out),
        Action::SwitchPrevious => run_switch_previous(manager, out),
        Action::Current => run_current(manager, out),
        Action::Unset => run_unset(manager, out),
        Action::Create { name, format } => run_create(manager, &name, &format, out),
        Action::Delete(name) => run_delete(manager, &name, out),
        Action::Rename { old_name, new_name } => run_rename(manager, &old_name, &new_name, out),
        Action::Show(name) => run_show(manager, &name, out),
        Action::Export(name) => run_export(manager, &name, out),
        Action::Import(name) => run_import(manager, &name, &mut std::io::stdin().lock(), out),
        Action::Edit { name, editor } => run_edit(manager, &name, &editor, out),
        Action::Interactive => run_interactive(manager, out),
    }
}
