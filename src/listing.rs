//! # Projects List Generation
//!
//! The single pass that turns a [`GitosisConfig`] into gitweb's
//! `projects.list`.
//!
//! ## Process
//!
//! For each section, in declaration order:
//!
//! 1.  **Classify**: only `repo <name>` sections are considered.
//! 2.  **Visibility**: skip the section unless [`VisibilityPolicy`] says it
//!     is published.
//! 3.  **Directory name**: record `name` or `name.git`, whichever exists
//!     under the repositories root (see [`reconcile_dir_name`]).
//! 4.  **Owner**: attach the section's `owner` value when present.
//! 5.  **Write**: encode the fields and write one line.
//!
//! Every qualifying section yields exactly one line. Nothing is sorted or
//! deduplicated.
//!
//! ## Example
//!
//! ```
//! use gitweb_projects::config::GitosisConfig;
//! use gitweb_projects::diagnostics::Diagnostics;
//! use gitweb_projects::listing;
//! use std::path::Path;
//!
//! let config = GitosisConfig::parse(
//!     "[gitosis]\ngitweb = yes\n[repo alpha]\nowner = Jane Doe\n",
//! )
//! .unwrap();
//!
//! let mut out = Vec::new();
//! let mut diagnostics = Diagnostics::new();
//! listing::generate(&config, Path::new("/nonexistent"), &mut out, &mut diagnostics).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "alpha Jane+Doe\n");
//! assert_eq!(diagnostics.len(), 1);
//! ```

use std::io::Write;
use std::path::Path;

use log::debug;

use crate::config::GitosisConfig;
use crate::diagnostics::Diagnostics;
use crate::encoding::encode_line;
use crate::error::Result;
use crate::repositories::reconcile_dir_name;
use crate::visibility::VisibilityPolicy;

/// Section kind naming a repository.
pub const REPO_KIND: &str = "repo";

/// Option holding the owner label.
pub const OWNER_KEY: &str = "owner";

/// One published repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Directory name below the repositories root.
    pub name: String,
    pub owner: Option<String>,
}

impl ProjectEntry {
    /// Fields in listing order: the name, then the owner if any.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(owner) = &self.owner {
            fields.push(owner);
        }
        fields
    }

    /// The encoded listing line, without terminator.
    pub fn to_line(&self) -> String {
        encode_line(&self.fields())
    }
}

/// Extract the repository name from a section name such as `repo foo`.
///
/// The name splits on the first run of whitespace. Returns `None` for any
/// other kind of section and for a bare `repo` header.
pub fn repo_name(section: &str) -> Option<&str> {
    let section = section.trim_start();
    let split = section.find(char::is_whitespace)?;
    let (kind, rest) = section.split_at(split);
    if kind != REPO_KIND {
        return None;
    }
    let name = rest.trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Collect the published repositories, in declaration order.
pub fn project_entries(
    config: &GitosisConfig,
    repositories: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ProjectEntry>> {
    let policy = VisibilityPolicy::from_config(config)?;
    let mut entries = Vec::new();

    for section in config.sections() {
        let Some(name) = repo_name(section.name()) else {
            debug!("Skipping section [{}]", section.name());
            continue;
        };

        if !policy.is_visible(config, section.name())? {
            debug!("Repository {} is not published", name);
            continue;
        }

        let name = reconcile_dir_name(repositories, name, diagnostics);
        let owner = section.get(OWNER_KEY).map(str::to_string);
        entries.push(ProjectEntry { name, owner });
    }

    Ok(entries)
}

/// Write entries one per line.
pub fn write_listing<W: Write>(entries: &[ProjectEntry], out: &mut W) -> Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.to_line())?;
    }
    Ok(())
}

/// Generate the projects list into `out`. Returns the number of lines
/// written; warnings go to `diagnostics`.
pub fn generate<W: Write>(
    config: &GitosisConfig,
    repositories: &Path,
    out: &mut W,
    diagnostics: &mut Diagnostics,
) -> Result<usize> {
    let entries = project_entries(config, repositories, diagnostics)?;
    write_listing(&entries, out)?;
    Ok(entries.len())
}
