//! # Gitosis Configuration
//!
//! Read-only model of a `gitosis.conf` file. The file is parsed with the
//! `rust-ini` crate and flattened into an ordered list of [`Section`]s so the
//! rest of the crate can ask for optional, typed values without caring about
//! the parser's internals.
//!
//! ## Lookup rules
//!
//! - Sections keep the order in which they first appear in the file. Two
//!   headers with the same name merge into one section, later keys winning.
//! - Option names are case-insensitive; section names are not.
//! - A missing section or key is `None`, never an error. Defaults are the
//!   caller's business.
//! - Booleans accept `1/yes/true/on` and `0/no/false/off` in any case.
//!   Anything else is [`Error::InvalidBoolean`].
//! - Values are raw text: quotes are kept and backslashes are literal. An
//!   indented line continues the previous value, joined with `\n`. A `;`
//!   preceded by whitespace starts a comment on the value's first line.
//!
//! ## Example
//!
//! ```
//! use gitweb_projects::config::GitosisConfig;
//!
//! let config = GitosisConfig::parse("[gitosis]\ngitweb = yes\n").unwrap();
//! assert_eq!(config.get_bool("gitosis", "gitweb").unwrap(), Some(true));
//! assert_eq!(config.get("gitosis", "repositories"), None);
//! ```

use std::io;
use std::path::Path;

use ini::{Ini, ParseOption};
use log::{debug, warn};

use crate::error::{Error, Result};

/// Name of the global section.
pub const GITOSIS_SECTION: &str = "gitosis";

/// Values are taken raw: no quote stripping, no escapes, and indented lines
/// continue the previous value.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..Default::default()
    }
}

/// A named section and its options, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    options: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: Vec::new(),
        }
    }

    /// The full section name, e.g. `repo foo`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an option value by (case-insensitive) key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.options
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: &str) {
        let key = key.to_ascii_lowercase();
        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.options.push((key, value.to_string())),
        }
    }
}

/// Parsed gitosis configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitosisConfig {
    sections: Vec<Section>,
}

impl GitosisConfig {
    /// An empty configuration: every lookup is absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let ini =
            Ini::load_from_str_opt(content, parse_option()).map_err(|e| Error::ConfigParse {
                message: e.to_string(),
                hint: Some("Expected sections such as [gitosis] or [repo NAME]".to_string()),
            })?;
        Ok(Self::from_ini(&ini))
    }

    /// Load configuration from a file.
    ///
    /// A file that does not exist yields an empty configuration and a
    /// warning, so a fresh installation simply produces an empty listing.
    pub fn from_file(path: &Path) -> Result<Self> {
        match Ini::load_from_file_opt(path, parse_option()) {
            Ok(ini) => {
                debug!("Loaded configuration from {}", path.display());
                Ok(Self::from_ini(&ini))
            }
            Err(ini::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "Configuration file {} not found, treating it as empty",
                    path.display()
                );
                Ok(Self::new())
            }
            Err(ini::Error::Io(e)) => Err(Error::ConfigParse {
                message: format!("Failed to read {}: {}", path.display(), e),
                hint: None,
            }),
            Err(ini::Error::Parse(e)) => Err(Error::ConfigParse {
                message: format!("{}: {}", path.display(), e),
                hint: Some("Expected sections such as [gitosis] or [repo NAME]".to_string()),
            }),
        }
    }

    fn from_ini(ini: &Ini) -> Self {
        let mut config = Self::new();
        // Entries before the first header belong to no section and are ignored.
        for (name, properties) in ini.iter() {
            let Some(name) = name else { continue };
            let index = match config.sections.iter().position(|s| s.name == name) {
                Some(index) => index,
                None => {
                    config.sections.push(Section::new(name));
                    config.sections.len() - 1
                }
            };
            for (key, value) in properties.iter() {
                config.sections[index].set(key, &strip_inline_comment(value));
            }
        }
        config
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Find a section by exact name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Look up a string value. Absent section or key yields `None`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Look up a boolean value.
    ///
    /// Absent section or key yields `Ok(None)`; a value that is present but
    /// not a boolean token is an error.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        match self.get(section, key) {
            None => Ok(None),
            Some(value) => parse_bool(value)
                .map(Some)
                .ok_or_else(|| Error::InvalidBoolean {
                    section: section.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                }),
        }
    }

    /// Resolve a boolean through a precedence-ordered list of
    /// `(section, key)` locations. The first location holding a value wins;
    /// if none does, `default` is returned.
    pub fn lookup_bool(&self, chain: &[(&str, &str)], default: bool) -> Result<bool> {
        for (section, key) in chain {
            if let Some(value) = self.get_bool(section, key)? {
                return Ok(value);
            }
        }
        Ok(default)
    }
}

/// Drop a `;` comment from the first line of a value. The `;` only starts a
/// comment when it follows whitespace, and only its first occurrence counts.
fn strip_inline_comment(value: &str) -> String {
    let (first, rest) = match value.find('\n') {
        Some(newline) => value.split_at(newline),
        None => (value, ""),
    };
    let first = match first.find(';') {
        Some(pos) if first[..pos].ends_with(char::is_whitespace) => first[..pos].trim_end(),
        _ => first,
    };
    format!("{}{}", first, rest)
}

/// Parse a boolean token the way gitosis configuration files spell them.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
