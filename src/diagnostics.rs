//! Non-fatal findings collected while building the projects list.
//!
//! The generation pass never logs directly; it records [`Warning`]s into a
//! [`Diagnostics`] sink handed in by the caller. The command-line tool then
//! reports them through the `log` facade with [`Diagnostics::log`].

use std::fmt;
use std::path::PathBuf;

use log::warn;

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Neither `root/name` nor `root/name.git` exists on disk.
    MissingRepository { name: String, root: PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingRepository { name, root } => {
                write!(f, "Cannot find {:?} in {:?}", name, root.display().to_string())
            }
        }
    }
}

/// Ordered collection of warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Emit every recorded warning at `warn` level, in order.
    pub fn log(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
