//! Default values for gitweb-projects.
//!
//! This module provides the home-derived defaults used by the library and
//! the command-line entry point.

use std::path::{Path, PathBuf};

/// File name of the gitosis configuration in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".gitosis.conf";

/// Directory under the home directory holding repositories when the
/// configuration does not say otherwise.
pub const REPOSITORIES_DIR: &str = "repositories";

/// Returns the invoking user's home directory.
///
/// Falls back to the current directory if the platform home directory
/// cannot be determined.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default configuration path, `~/.gitosis.conf`.
///
/// This can be overridden by the `--config` CLI flag or the
/// `GITOSIS_CONFIG` environment variable.
pub fn default_config_path() -> PathBuf {
    config_path_in(&home_dir())
}

/// Configuration path for a given home directory.
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}
