use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::dependencies_config::MavenDependency;

/// Render-ready `<dependency>` entry for the aggregator descriptor.
///
/// An empty `scope` means the element is omitted from the output.
#[derive(Debug, Clone)]
pub struct PomDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
    pub exclusions: Vec<PomExclusion>,
}

/// Render-ready `<exclusion>` entry.
#[derive(Debug, Clone)]
pub struct PomExclusion {
    pub group_id: String,
    pub artifact_id: String,
}

impl From<&MavenDependency> for PomDependency {
    fn from(dep: &MavenDependency) -> Self {
        PomDependency {
            group_id: dep.group_id.clone(),
            artifact_id: dep.artifact_id.clone(),
            version: dep.version.clone(),
            scope: dep.scope.clone().unwrap_or_default(),
            exclusions: dep
                .exclusions
                .iter()
                .map(|excl| PomExclusion {
                    group_id: excl.group_id.clone(),
                    artifact_id: excl.artifact_id.clone(),
                })
                .collect(),
        }
    }
}

/// Template data for the aggregator `pom.xml`.
///
/// `modules` must be in allocation order; the descriptor lists them verbatim.
#[derive(Template)]
#[template(path = "aggregator_pom.xml", escape = "none")]
pub struct AggregatorPomTemplate {
    /// Aggregator groupId (the project's base package)
    pub group_id: String,
    /// Aggregator artifactId (the project name)
    pub artifact_id: String,
    /// Project version shared with every module's parent reference
    pub version: String,
    /// Java release for maven.compiler.source/target
    pub java_version: String,
    /// Dependency set declared on the aggregator
    pub dependencies: Vec<PomDependency>,
    /// One `<module>` entry per sub-module, in allocation order
    pub modules: Vec<String>,
}

/// Template data for a per-module `pom.xml`.
#[derive(Template)]
#[template(path = "module_pom.xml", escape = "none")]
pub struct ModulePomTemplate {
    pub parent_group_id: String,
    pub parent_artifact_id: String,
    pub parent_version: String,
    /// `<base package>.<module name>`
    pub group_id: String,
    /// The module name
    pub artifact_id: String,
}

/// Template data for the Spring Boot entry point class.
#[derive(Template)]
#[template(path = "MainApplication.java.txt")]
pub struct MainApplicationTemplate {
    pub package: String,
    pub module: String,
}

/// Template data for the `/health` endpoint class.
#[derive(Template)]
#[template(path = "HealthCheckController.java.txt")]
pub struct HealthCheckControllerTemplate {
    pub package: String,
    pub module: String,
}

/// Template data for the placeholder class in secondary modules.
#[derive(Template)]
#[template(path = "SampleClass.java.txt")]
pub struct SampleClassTemplate {
    pub package: String,
    pub module: String,
}

/// Write `content` to `dir/file_name`, creating `dir` recursively first.
///
/// Overwrites any existing file. Errors carry the path that failed.
pub fn write_file(dir: &Path, file_name: &str, content: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {dir:?}"))?;
    let path = dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("Failed to write {path:?}"))?;
    Ok(path)
}

/// Write the aggregator `pom.xml` into the project root.
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails
pub fn write_aggregator_pom(
    project_dir: &Path,
    group_id: &str,
    artifact_id: &str,
    version: &str,
    java_version: &str,
    modules: &[String],
    dependencies: &[MavenDependency],
) -> anyhow::Result<PathBuf> {
    let rendered = AggregatorPomTemplate {
        group_id: group_id.to_string(),
        artifact_id: artifact_id.to_string(),
        version: version.to_string(),
        java_version: java_version.to_string(),
        dependencies: dependencies.iter().map(PomDependency::from).collect(),
        modules: modules.to_vec(),
    }
    .render()?;
    let path = write_file(project_dir, "pom.xml", &rendered)?;
    println!("✅ Generated aggregator descriptor → {path:?}");
    Ok(path)
}

/// Write a module's `pom.xml` into its module directory.
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails
pub fn write_module_pom(
    module_dir: &Path,
    package: &str,
    project_name: &str,
    project_version: &str,
    module_name: &str,
) -> anyhow::Result<PathBuf> {
    let rendered = ModulePomTemplate {
        parent_group_id: package.to_string(),
        parent_artifact_id: project_name.to_string(),
        parent_version: project_version.to_string(),
        group_id: format!("{package}.{module_name}"),
        artifact_id: module_name.to_string(),
    }
    .render()?;
    let path = write_file(module_dir, "pom.xml", &rendered)?;
    println!("✅ Generated module descriptor → {path:?}");
    Ok(path)
}

/// Write `MainApplication.java` into the primary module's source directory.
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails
pub fn write_main_application(
    source_dir: &Path,
    package: &str,
    module_name: &str,
) -> anyhow::Result<PathBuf> {
    let rendered = MainApplicationTemplate {
        package: package.to_string(),
        module: module_name.to_string(),
    }
    .render()?;
    let path = write_file(source_dir, "MainApplication.java", &rendered)?;
    println!("✅ Generated entry point → {path:?}");
    Ok(path)
}

/// Write `HealthCheckController.java` into the primary module's controllers directory.
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails
pub fn write_health_check_controller(
    controllers_dir: &Path,
    package: &str,
    module_name: &str,
) -> anyhow::Result<PathBuf> {
    let rendered = HealthCheckControllerTemplate {
        package: package.to_string(),
        module: module_name.to_string(),
    }
    .render()?;
    let path = write_file(controllers_dir, "HealthCheckController.java", &rendered)?;
    println!("✅ Generated health check → {path:?}");
    Ok(path)
}

/// Write `SampleClass.java` into a secondary module's source directory.
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails
pub fn write_sample_class(
    source_dir: &Path,
    package: &str,
    module_name: &str,
) -> anyhow::Result<PathBuf> {
    let rendered = SampleClassTemplate {
        package: package.to_string(),
        module: module_name.to_string(),
    }
    .render()?;
    let path = write_file(source_dir, "SampleClass.java", &rendered)?;
    println!("✅ Generated placeholder class → {path:?}");
    Ok(path)
}
