//! Switching between contexts

use std::io::Write;

use colored::Colorize;
use occtx_core::ContextManager;

use crate::error::{CliError, Result};
use crate::interactive;

/// Run the switch command
pub fn run_switch(manager: &ContextManager, name: &str, out: &mut dyn Write) -> Result<()> {
    manager.switch(name)?;
    print_switched(name, out)
}

/// Run the switch-to-previous command (`occtx -`)
pub fn run_switch_previous(manager: &ContextManager, out: &mut dyn Write) -> Result<()> {
    let name = manager.switch_to_previous()?;
    print_switched(&name, out)
}

/// Pick a context interactively, then switch to it.
pub fn run_interactive(manager: &ContextManager, out: &mut dyn Write) -> Result<()> {
    let names: Vec<String> = manager.list_all()?.into_iter().map(|c| c.name).collect();
    if names.is_empty() {
        return Err(CliError::user("no contexts available"));
    }
    let current = manager.current()?;

    let Some(name) = interactive::select_context(&names, current.as_deref())? else {
        return Err(CliError::user("no context selected"));
    };
    run_switch(manager, &name, out)
}

fn print_switched(name: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", format!("Switched to context: {}", name).green().bold())?;
    Ok(())
}
