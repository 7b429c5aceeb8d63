//! Repository location on disk.
//!
//! Two concerns live here: where the repositories root is, and which
//! directory name a configured repository actually uses below it.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{GitosisConfig, GITOSIS_SECTION};
use crate::defaults::REPOSITORIES_DIR;
use crate::diagnostics::{Diagnostics, Warning};

/// Resolve the repositories root.
///
/// `gitosis.repositories` is joined onto `home`, so a relative value is
/// taken relative to the home directory and an absolute value is used as is.
/// Without that key the root is `home/repositories`.
pub fn repositories_root(config: &GitosisConfig, home: &Path) -> PathBuf {
    let root = match config.get(GITOSIS_SECTION, "repositories") {
        Some(path) => home.join(path),
        None => home.join(REPOSITORIES_DIR),
    };
    debug!("Repositories root: {}", root.display());
    root
}

/// Pick the directory name to record for `name`.
///
/// Prefers `root/name`; falls back to `root/name.git`. When neither exists
/// the original name is returned and a [`Warning::MissingRepository`] is
/// recorded. The entry is never dropped.
pub fn reconcile_dir_name(root: &Path, name: &str, diagnostics: &mut Diagnostics) -> String {
    if root.join(name).exists() {
        return name.to_string();
    }

    let with_suffix = format!("{}.git", name);
    if root.join(&with_suffix).exists() {
        return with_suffix;
    }

    diagnostics.push(Warning::MissingRepository {
        name: name.to_string(),
        root: root.to_path_buf(),
    });
    name.to_string()
}
