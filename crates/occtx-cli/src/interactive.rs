//! Interactive context selection
//!
//! Uses `fzf` when it is on `PATH`, otherwise falls back to dialoguer's
//! built-in fuzzy select.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;

use crate::error::Result;

/// Marker shown in front of the current context.
const CURRENT_MARKER: char = '*';

/// Ask the user to pick one of `names`. `None` means the user cancelled.
pub fn select_context(names: &[String], current: Option<&str>) -> Result<Option<String>> {
    if let Some(fzf) = std::env::var_os("PATH").and_then(|path| find_in_path(&path, "fzf")) {
        match select_with_fzf(&fzf, names, current) {
            Ok(selection) => return Ok(selection),
            Err(e) => tracing::debug!(error = %e, "fzf unavailable, using built-in selector"),
        }
    }
    select_with_prompt(names, current)
}

fn select_with_fzf(
    fzf: &Path,
    names: &[String],
    current: Option<&str>,
) -> std::io::Result<Option<String>> {
    let mut child = Command::new(fzf)
        .args(["--height", "40%", "--reverse", "--border", "--ansi"])
        .args(["--delimiter", "\t", "--with-nth", "2.."])
        .args(["--prompt", "Select context: ", "--header", "Press ESC to cancel"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(fzf_input(names, current).as_bytes())?;
    }

    let output = child.wait_with_output()?;
    match output.status.code() {
        Some(0) => Ok(parse_fzf_selection(&String::from_utf8_lossy(&output.stdout))
            .and_then(|idx| names.get(idx).cloned())),
        // 1: no match, 130: interrupted
        Some(1) | Some(130) => Ok(None),
        _ => Err(std::io::Error::other(format!("fzf exited with {}", output.status))),
    }
}

fn select_with_prompt(names: &[String], current: Option<&str>) -> Result<Option<String>> {
    let items: Vec<String> = names
        .iter()
        .map(|name| escape_controls(&label(name, current)))
        .collect();
    let default = current
        .and_then(|c| names.iter().position(|name| name == c))
        .unwrap_or(0);

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select context")
        .items(&items)
        .default(default)
        .max_length(10)
        .interact_opt()?;

    Ok(selection.map(|idx| names[idx].clone()))
}

fn label(name: &str, current: Option<&str>) -> String {
    if current == Some(name) {
        format!("{} {}", CURRENT_MARKER, name)
    } else {
        format!("  {}", name)
    }
}

/// One line per context: a hidden index column, a tab, then the label.
///
/// Control characters in labels are escaped so every context stays on its
/// own line.
fn fzf_input(names: &[String], current: Option<&str>) -> String {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("{}\t{}", idx, escape_controls(&label(name, current))))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_controls(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Index of the selected line, read from the hidden first column.
fn parse_fzf_selection(output: &str) -> Option<usize> {
    let line = output.lines().next()?;
    let (idx, _) = line.split_once('\t')?;
    idx.parse().ok()
}

/// Locate an executable named `program` in a `PATH`-style list.
fn find_in_path(path_var: &OsStr, program: &str) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}
