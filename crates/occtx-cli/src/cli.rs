//! CLI argument parsing using clap derive
//!
//! occtx is flag-driven rather than subcommand-driven: a bare context name
//! switches, `-` switches back, and every other operation is a flag. At most
//! one action flag may be given.

use clap::{ArgGroup, Parser};

/// opencode context switcher
///
/// Examples:
///   occtx                  # List contexts
///   occtx work             # Switch to 'work'
///   occtx -                # Switch back to the previous context
///   occtx -n work -f jsonc # Save the active config as 'work'
#[derive(Parser, Debug)]
#[command(name = "occtx")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["current", "unset", "new", "delete", "rename", "show", "export", "import", "edit", "interactive"])
        .multiple(false)
))]
pub struct Cli {
    /// Context to switch to, or '-' for the previous one
    #[arg(value_name = "CONTEXT", conflicts_with = "action")]
    pub context: Option<String>,

    /// Show current context name
    #[arg(short, long)]
    pub current: bool,

    /// Unset current context
    #[arg(short, long)]
    pub unset: bool,

    /// Create new context from current settings
    #[arg(short, long, value_name = "NAME")]
    pub new: Option<String>,

    /// Format for new context (json, jsonc)
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: String,

    /// Delete context
    #[arg(short, long, value_name = "NAME")]
    pub delete: Option<String>,

    /// Rename context
    #[arg(short, long, num_args = 2, value_names = ["OLD", "NEW"])]
    pub rename: Option<Vec<String>>,

    /// Show context content
    #[arg(short, long, value_name = "NAME")]
    pub show: Option<String>,

    /// Export context to stdout
    #[arg(long, value_name = "NAME")]
    pub export: Option<String>,

    /// Import context from stdin
    #[arg(long, value_name = "NAME")]
    pub import: Option<String>,

    /// Edit context with $EDITOR
    #[arg(short, long, value_name = "NAME")]
    pub edit: Option<String>,

    /// Interactive context selection
    #[arg(short, long)]
    pub interactive: bool,

    /// Use project-level contexts (./opencode.json)
    #[arg(long)]
    pub in_project: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Editor used by --edit
    #[arg(long, env = "EDITOR", default_value = "vi", hide = true)]
    pub editor: String,
}

/// The single operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Switch(String),
    SwitchPrevious,
    Current,
    Unset,
    Create { name: String, format: String },
    Delete(String),
    Rename { old_name: String, new_name: String },
    Show(String),
    Export(String),
    Import(String),
    Edit { name: String, editor: String },
    Interactive,
}

impl Cli {
    /// Collapse the parsed flags into one action.
    pub fn action(&self) -> Action {
        if self.interactive {
            return Action::Interactive;
        }
        if self.current {
            return Action::Current;
        }
        if self.unset {
            return Action::Unset;
        }
        if let Some(name) = &self.new {
            return Action::Create {
                name: name.clone(),
                format: self.format.clone(),
            };
        }
        if let Some(name) = &self.delete {
            return Action::Delete(name.clone());
        }
        if let Some(name) = &self.edit {
            return Action::Edit {
                name: name.clone(),
                editor: self.editor.clone(),
            };
        }
        if let Some(name) = &self.show {
            return Action::Show(name.clone());
        }
        if let Some(name) = &self.export {
            return Action::Export(name.clone());
        }
        if let Some(name) = &self.import {
            return Action::Import(name.clone());
        }
        if let Some([old_name, new_name]) = self.rename.as_deref() {
            return Action::Rename {
                old_name: old_name.clone(),
                new_name: new_name.clone(),
            };
        }

        match self.context.as_deref() {
            None => Action::List,
            Some("-") => Action::SwitchPrevious,
            Some(name) => Action::Switch(name.to_string()),
        }
    }
}
