//! # CLI Module
//!
//! Command-line interface for the pomforge scaffolder.
//!
//! ## Commands
//!
//! ### `new`
//!
//! Scaffold a multi-module Maven project:
//!
//! ```bash
//! pomforge new --dir /tmp --name demo --package org.acme \
//!     --modules 2 --module-name core --module-name util
//! ```
//!
//! Flags are optional; every value not supplied is collected through the
//! interactive session, in order: directory, project name, package name,
//! module count, then one prompt per module name.
//!
//! Options:
//! - `--dir <DIR>` - directory in which the project directory is created
//! - `--name <NAME>` - project name (aggregator artifactId)
//! - `--package <PACKAGE>` - base Java package (aggregator groupId)
//! - `--modules <N>` - number of modules
//! - `--module-name <NAME>` - module names, repeated or comma-separated
//! - `--project-version <V>` - aggregator/parent version (default: 1.0.0)
//! - `--java-version <V>` - maven.compiler.source/target (default: 17)
//! - `--fail-fast` - abort on the first write failure
//! - `--dependencies-config <FILE>` - extra aggregator dependencies
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use pomforge::cli::run_cli;
//!
//! run_cli()?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
