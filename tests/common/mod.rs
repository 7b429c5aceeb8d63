//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::GLOBAL_ON);
//!     fixture.command().arg("projects.list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common gitosis.conf snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Global gitweb on, `alpha` inherits it, `beta` opts out.
    pub const GLOBAL_ON: &str = r#"[gitosis]
gitweb = yes

[repo alpha]

[repo beta]
gitweb = no
"#;

    /// Same as `GLOBAL_ON` with an owner on `alpha`.
    pub const GLOBAL_ON_WITH_OWNER: &str = r#"[gitosis]
gitweb = yes

[repo alpha]
owner = Jane Doe

[repo beta]
gitweb = no
"#;

    /// A malformed boolean.
    pub const INVALID_BOOLEAN: &str = r#"[repo alpha]
gitweb = perhaps
"#;

    /// Not parseable as INI.
    pub const INVALID_SYNTAX: &str = "[repo alpha\ngitweb = yes\n";
}

/// A temporary home directory holding `.gitosis.conf` and a
/// `repositories/` root.
///
/// Commands built with [`TestFixture::command`] run with `HOME` pointing at
/// the fixture, so the default config and repositories paths resolve into it.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary home.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `~/.gitosis.conf` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".gitosis.conf")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Create a repository directory below `~/repositories`.
    pub fn with_repository(self, name: &str) -> Self {
        self.temp_dir
            .child("repositories")
            .child(name)
            .create_dir_all()
            .expect("Failed to create repository directory");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary home.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the projects list inside the fixture.
    pub fn listing_path(&self) -> PathBuf {
        self.temp_dir.path().join("projects.list")
    }

    /// Read the projects list back.
    pub fn listing(&self) -> String {
        std::fs::read_to_string(self.listing_path()).expect("Failed to read projects list")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Command for the binary with `HOME` set to the fixture and
    /// configuration-related environment cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gitweb-projects");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("GITOSIS_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
