//! dump-todo - print every `TODO:` marker under the current directory
//!
//! dump-todo provides:
//! - A recursive walk of the working directory, dotfiles included
//! - Filtering through the root `.gitignore`
//! - One `path:line: TODO: text` line per marker on stdout

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;

fn main() -> Result<()> {
    crate::core::logging::init_tracing();

    let cli = cli::Cli::parse();
    cli::run(cli)
}
