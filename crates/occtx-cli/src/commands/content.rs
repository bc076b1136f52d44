//! Reading, importing and editing context content

use std::io::{Read, Write};
use std::process::Command;

use colored::Colorize;
use occtx_core::ContextManager;

use crate::error::{CliError, Result};

/// Run the show command
///
/// Prints the stored bytes, comment header included.
pub fn run_show(manager: &ContextManager, name: &str, out: &mut dyn Write) -> Result<()> {
    let raw = manager.read_raw(name)?;
    out.write_all(&raw)?;
    if !raw.ends_with(b"\n") {
        writeln!(out)?;
    }
    Ok(())
}

/// Run the export command
///
/// Writes the stored bytes unchanged, for piping into a file or another
/// `occtx --import`.
pub fn run_export(manager: &ContextManager, name: &str, out: &mut dyn Write) -> Result<()> {
    let raw = manager.read_raw(name)?;
    out.write_all(&raw)?;
    out.flush()?;
    Ok(())
}

/// Run the import command, reading JSON from `input`.
pub fn run_import(
    manager: &ContextManager,
    name: &str,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    manager.import(name, &bytes)?;
    writeln!(
        out,
        "{}",
        format!("Context '{}' imported successfully", name).green().bold()
    )?;
    Ok(())
}

/// Run the edit command
///
/// `editor` may carry arguments (`code --wait`). After the editor exits the
/// context is re-read and a warning is printed if it no longer parses.
pub fn run_edit(manager: &ContextManager, name: &str, editor: &str, out: &mut dyn Write) -> Result<()> {
    let context = manager.repository().resolve(name)?;

    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(CliError::user("EDITOR is empty"));
    };

    tracing::debug!(program, path = %context.file_path.display(), "launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(&context.file_path)
        .status()
        .map_err(|e| CliError::user(format!("failed to run editor '{}': {}", program, e)))?;
    if !status.success() {
        return Err(CliError::user(format!("editor exited with {}", status)));
    }

    match manager.get(name) {
        Ok(_) => writeln!(
            out,
            "{}",
            format!("Context '{}' edited successfully", name).green().bold()
        )?,
        Err(e) => writeln!(out, "{} {}", "warning:".yellow().bold(), e)?,
    }
    Ok(())
}
