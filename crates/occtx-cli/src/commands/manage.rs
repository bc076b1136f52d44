//! Creating, deleting, renaming and clearing contexts

use std::io::Write;

use colored::Colorize;
use occtx_core::{ContextFormat, ContextManager};

use crate::error::Result;

/// Run the current command
pub fn run_current(manager: &ContextManager, out: &mut dyn Write) -> Result<()> {
    match manager.current()? {
        Some(name) => writeln!(out, "{}", name)?,
        None => writeln!(out, "No current context set")?,
    }
    Ok(())
}

/// Run the unset command
pub fn run_unset(manager: &ContextManager, out: &mut dyn Write) -> Result<()> {
    manager.unset()?;
    writeln!(out, "Current context unset")?;
    Ok(())
}

/// Run the create command
///
/// The format string is validated before the manager is touched.
pub fn run_create(manager: &ContextManager, name: &str, format: &str, out: &mut dyn Write) -> Result<()> {
    let format: ContextFormat = format.parse()?;
    let context = manager.create(name, format)?;
    writeln!(
        out,
        "{}",
        format!("Context '{}' created successfully ({} format)", context.name, context.format)
            .green()
            .bold()
    )?;
    Ok(())
}

/// Run the delete command
pub fn run_delete(manager: &ContextManager, name: &str, out: &mut dyn Write) -> Result<()> {
    manager.delete(name)?;
    writeln!(out, "Context '{}' deleted", name)?;
    Ok(())
}

/// Run the rename command
pub fn run_rename(manager: &ContextManager, old_name: &str, new_name: &str, out: &mut dyn Write) -> Result<()> {
    manager.rename(old_name, new_name)?;
    writeln!(out, "Context '{}' renamed to '{}'", old_name, new_name)?;
    Ok(())
}
