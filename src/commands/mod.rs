//! # CLI Command Implementations
//!
//! This module contains the implementation of the `gitweb-projects` command.
//!
//! ## Structure
//!
//! The command module contains:
//! - An `Args` struct that defines the command's arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `gitweb_projects` library.

pub mod generate;
