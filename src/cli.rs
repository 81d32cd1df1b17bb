//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;

use crate::backends::scan::{run_scan, ScanConfig};

/// dump-todo - print every `TODO:` marker under the current directory.
#[derive(Parser, Debug)]
#[command(name = "dump-todo")]
#[command(
    author,
    version,
    about,
    long_about = r#"dump-todo walks the current directory, including dotfiles, and prints
every line that contains the literal marker `TODO:`.

Each hit is printed as:

    relative/path:LINE: TODO: remaining text

Skipped paths:
- the .git directory
- the dump-todo executable itself, when it lives under the current directory
- anything matched by ./.gitignore

Files that are not valid UTF-8, or cannot be read for lack of permission,
are skipped silently.

Set DUMP_TODO_LOG=debug to see skipped files and a run summary on stderr.
"#
)]
pub struct Cli {}

/// Run the CLI with parsed arguments
pub fn run(_cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let config = ScanConfig::load(&cwd).context("cannot prepare scan")?;

    run_scan(&config)
}
