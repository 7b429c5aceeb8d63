//! Which repositories are published in the listing.
//!
//! A repository is visible when its section says `gitweb = yes`. Without a
//! section-level value the global `gitosis.gitweb` applies, and without that
//! the repository stays hidden.

use crate::config::{GitosisConfig, GITOSIS_SECTION};
use crate::error::Result;

/// Option name controlling visibility, both globally and per section.
pub const GITWEB_KEY: &str = "gitweb";

/// Visibility rule with the global default already resolved.
///
/// The global value is read once, up front, so a malformed `gitosis.gitweb`
/// fails the run even when every repository overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityPolicy {
    global: bool,
}

impl VisibilityPolicy {
    pub fn from_config(config: &GitosisConfig) -> Result<Self> {
        let global = config.lookup_bool(&[(GITOSIS_SECTION, GITWEB_KEY)], false)?;
        Ok(Self { global })
    }

    /// Visibility of the repository configured in `section`.
    pub fn is_visible(&self, config: &GitosisConfig, section: &str) -> Result<bool> {
        config.lookup_bool(&[(section, GITWEB_KEY)], self.global)
    }
}
