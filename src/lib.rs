//! # pomforge
//!
//! **pomforge** is an interactive command-line scaffolder for multi-module
//! Maven projects: one top-level aggregator plus N sub-modules, each with its
//! own build descriptor, a Spring Boot entry point and `/health` endpoint in
//! the first module, and a placeholder class in every other module.
//!
//! ## Overview
//!
//! A generation run collects four inputs (target directory, project name,
//! base package, module count), allocates one valid unique name per module,
//! and writes the project tree. Descriptor and source bodies are rendered
//! from Askama templates; paths are computed by a pure layout planner; all
//! filesystem access goes through a single overwrite-on-write helper.
//!
//! ## Architecture
//!
//! The library is organized into two key modules:
//!
//! - **[`cli`]** - clap-based command line, interactive prompting, and the
//!   `new` subcommand
//! - **[`generator`]** - name allocation, layout planning, template
//!   rendering, and the orchestrator that writes the project tree
//!
//! ## Generation Flow
//!
//! ```text
//! pomforge new
//!   → collect directory, project name, package, module count
//!   → for each slot: allocate a unique valid module name
//!       → write <module>/pom.xml
//!       → module 1: write MainApplication.java + controllers/HealthCheckController.java
//!       → modules 2..N: write SampleClass.java
//!   → write the aggregator pom.xml listing every module in order
//! ```
//!
//! ## Failure Handling
//!
//! Write failures are handled per the selected [`FailureMode`]: best-effort
//! (log and continue, the default) or fail-fast (abort on the first error).
//! There is no rollback; a failed run leaves the files written so far.

pub mod cli;
pub mod generator;

pub use generator::{
    generate_project, FailureMode, GenerationReport, Module, ModuleRole, NameSource, Project,
};
