//! # Generator Module
//!
//! The generator module scaffolds a complete multi-module Maven project from
//! four pieces of user input: target directory, project name, base package,
//! and module count.
//!
//! ## Overview
//!
//! A generated project consists of:
//! - **Aggregator descriptor** - top-level `pom.xml` declaring shared
//!   properties, the dependency set, and one `<module>` entry per sub-module
//! - **Module descriptors** - one `pom.xml` per module referencing the
//!   aggregator as parent
//! - **Entry point** - `MainApplication.java` in the first module
//! - **Health endpoint** - `HealthCheckController.java` (`GET /health`) in
//!   the first module's `controllers` sub-package
//! - **Placeholder classes** - `SampleClass.java` in every other module
//!
//! ## Architecture
//!
//! The generator uses Askama templates to produce descriptor and source text:
//!
//! ```text
//! User input → Name Allocation → Layout Planning → Template Rendering → Written Files
//! ```
//!
//! 1. **Name Allocation** - collects one valid, unique name per module slot
//!    from a [`NameSource`]
//! 2. **Layout Planning** - pure path computation for every generated file
//! 3. **Template Rendering** - renders Askama templates with the project and
//!    module data
//! 4. **Orchestration** - creates directories, writes files, and reports the
//!    outcome
//!
//! ## Generated Structure
//!
//! ```text
//! my-project/
//! ├── pom.xml                 # aggregator descriptor
//! ├── core/                   # first (primary) module
//! │   ├── pom.xml
//! │   └── src/main/java/org/acme/core/
//! │       ├── MainApplication.java
//! │       └── controllers/
//! │           └── HealthCheckController.java
//! └── util/                   # later (secondary) modules
//!     ├── pom.xml
//!     └── src/main/java/org/acme/util/
//!         └── SampleClass.java
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pomforge::generator::{generate_project, FailureMode, Project, ScriptedNameSource};
//!
//! let project = Project {
//!     root: "/tmp".into(),
//!     name: "demo".to_string(),
//!     package: "org.acme".to_string(),
//!     module_count: 2,
//!     version: "1.0.0".to_string(),
//!     java_version: "17".to_string(),
//! };
//! let mut names = ScriptedNameSource::new(["core", "util"]);
//! let report = generate_project(&project, &mut names, &[], FailureMode::BestEffort)?;
//! ```

mod dependencies_config;
mod layout;
mod names;
mod project;
mod templates;

pub use dependencies_config::*;
pub use layout::*;
pub use names::*;
pub use project::*;
pub use templates::*;
