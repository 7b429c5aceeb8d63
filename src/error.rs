//! # Error Handling
//!
//! This module defines the centralized error type for the `gitweb-projects`
//! library. It uses the `thiserror` library to describe every failure that
//! can end a run, with enough context for the message to stand on its own.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all fatal failure modes.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Conditions the tool treats as normal are deliberately absent here: a
//! missing `repositories`, `gitweb` or `owner` key falls back to a default,
//! and a repository directory missing on disk is only a warning (see
//! [`crate::diagnostics`]).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gitweb-projects operations
#[derive(Error, Debug)]
pub enum Error {
    /// The gitosis configuration file could not be read or parsed.
    ///
    /// Includes an optional hint about how to fix the file.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A boolean option holds something other than a recognised
    /// true/false token.
    #[error("Invalid boolean for '{key}' in section [{section}]: {value:?} (expected yes/no, true/false, on/off or 1/0)")]
    InvalidBoolean {
        section: String,
        key: String,
        value: String,
    },

    /// Writing or replacing the projects list failed.
    #[error("Failed to write projects list {}: {message}", path.display())]
    Output { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
