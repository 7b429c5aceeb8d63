//! # gitweb-projects CLI
//!
//! This is the binary entry point for the `gitweb-projects` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Running the generation command and reporting errors.
//!
//! The core logic lives in the `lib.rs` library crate, so the binary stays a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
