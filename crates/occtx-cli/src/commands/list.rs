//! Context listing

use std::io::Write;

use colored::Colorize;
use occtx_core::{ContextManager, Scope};

use crate::error::Result;

/// Run the list command
///
/// Prints every context in the manager's scope with the current one marked.
/// In the global scope, hints at `--in-project` when the working directory
/// has project contexts.
pub fn run_list(manager: &ContextManager, out: &mut dyn Write) -> Result<()> {
    let contexts = manager.list_all()?;
    let current = manager.current()?;
    let scope = manager.scope();

    if contexts.is_empty() {
        writeln!(out, "No {} contexts found", scope)?;
    } else {
        let heading = match scope {
            Scope::Global => "Global contexts:",
            Scope::Project => "Project contexts:",
        };
        writeln!(out, "{}", heading.bold())?;
        for context in &contexts {
            if current.as_deref() == Some(context.name.as_str()) {
                writeln!(out, "{}", format!("* {}", context.name).green().bold())?;
            } else {
                writeln!(out, "  {}", context.name)?;
            }
        }
    }

    if scope == Scope::Global && manager.has_contexts(Scope::Project) {
        writeln!(out)?;
        writeln!(
            out,
            "{} Found project-level contexts. Use {} to see them.",
            "Hint:".blue().bold(),
            "--in-project".cyan()
        )?;
    }

    Ok(())
}
