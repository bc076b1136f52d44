//! occtx: opencode context switcher
//!
//! Saves named snapshots of `opencode.json` and swaps them in and out of
//! place, globally or per project.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use occtx_core::{ContextManager, Scope};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::Result;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr so exported content on stdout stays clean.
///
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let scope = Scope::from_project_flag(cli.in_project);
    let manager = ContextManager::from_env(scope)?;
    tracing::debug!(
        scope = %scope,
        active_config = %manager.active_config().display(),
        "resolved paths"
    );

    let mut stdout = std::io::stdout().lock();
    commands::execute(&manager, cli.action(), &mut stdout)
}
