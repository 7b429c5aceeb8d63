//! # gitweb Projects Library
//!
//! This library turns a gitosis access-control configuration into the
//! `projects.list` file that gitweb uses to decide which repositories to
//! show. It is used by the `gitweb-projects` command-line tool, usually run
//! from a gitosis hook after the configuration changes.
//!
//! ## Quick Example
//!
//! ```
//! use gitweb_projects::config::GitosisConfig;
//! use gitweb_projects::diagnostics::Diagnostics;
//! use gitweb_projects::listing;
//! use std::path::Path;
//!
//! let config = GitosisConfig::parse(
//!     "[gitosis]\ngitweb = yes\n\n[repo alpha]\n\n[repo beta]\ngitweb = no\n",
//! )
//! .unwrap();
//!
//! let mut diagnostics = Diagnostics::new();
//! let entries = listing::project_entries(&config, Path::new("/nonexistent"), &mut diagnostics)
//!     .unwrap();
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].name, "alpha");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: ordered sections with optional, typed
//!   lookups over `gitosis.conf`.
//! - **Visibility (`visibility`)**: per-repository `gitweb` flag falling back
//!   to the global `gitosis.gitweb` flag, then to hidden.
//! - **Repositories (`repositories`)**: the repositories root and the
//!   `name` / `name.git` directory fallback.
//! - **Encoding (`encoding`)**: the form-urlencoded line format gitweb reads.
//! - **Listing (`listing`)**: the generation pass tying the above together.
//! - **Atomic output (`atomic`)**: temp file plus rename, so gitweb never sees
//!   a half-written list.
//! - **Diagnostics (`diagnostics`)**: non-fatal warnings collected during a
//!   run and reported by the caller.

pub mod atomic;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod listing;
pub mod repositories;
pub mod visibility;

#[cfg(test)]
mod listing_proptest;
