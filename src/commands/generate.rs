//! Generate command implementation
//!
//! Reads the gitosis configuration, builds the projects list and atomically
//! replaces the listing file given on the command line:
//! 1. Load the configuration (`--config`, default `~/.gitosis.conf`)
//! 2. Resolve the repositories root below the home directory
//! 3. Run the generation pass into a temporary file
//! 4. Rename the temporary file over the listing
//! 5. Report warnings collected along the way

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;

use gitweb_projects::atomic::write_atomically;
use gitweb_projects::config::GitosisConfig;
use gitweb_projects::defaults;
use gitweb_projects::diagnostics::Diagnostics;
use gitweb_projects::listing;
use gitweb_projects::repositories::repositories_root;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path of the projects list to write
    #[arg(value_name = "PROJECTS_LIST")]
    pub projects_list: PathBuf,

    /// Read the gitosis configuration from FILE [default: ~/.gitosis.conf]
    #[arg(long, value_name = "FILE", env = "GITOSIS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config_path = args.config.unwrap_or_else(defaults::default_config_path);

    let config = GitosisConfig::from_file(&config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_path.display()
        )
    })?;

    let repositories = repositories_root(&config, &defaults::home_dir());

    let mut diagnostics = Diagnostics::new();
    let count = write_atomically(&args.projects_list, |out| {
        listing::generate(&config, &repositories, out, &mut diagnostics)
    })
    .with_context(|| {
        format!(
            "Failed to generate projects list {}",
            args.projects_list.display()
        )
    })?;

    diagnostics.log();
    info!(
        "Wrote {} project(s) to {}",
        count,
        args.projects_list.display()
    );

    Ok(())
}
