use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::error;

use crate::generator::dependencies_config::{aggregator_dependencies, MavenDependency};
use crate::generator::layout::{source_dir, CONTROLLERS_SUFFIX};
use crate::generator::names::{allocate_module_name, NameSource};
use crate::generator::templates::{
    write_aggregator_pom, write_health_check_controller, write_main_application, write_module_pom,
    write_sample_class,
};

/// Immutable description of the project to scaffold.
///
/// Built once from user input; everything downstream takes explicit paths
/// derived from it rather than relying on the process working directory.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory in which the project directory is created
    pub root: PathBuf,
    /// Project name; also the aggregator artifactId
    pub name: String,
    /// Base Java package; also the aggregator groupId
    pub package: String,
    /// Number of modules to allocate and scaffold
    pub module_count: usize,
    /// Version shared by the aggregator and every module's parent reference
    pub version: String,
    /// Java release embedded in maven.compiler.source/target
    pub java_version: String,
}

impl Project {
    /// The project directory: `<root>/<name>`.
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(&self.name)
    }
}

/// Role of a module within the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRole {
    /// First module; hosts the entry point and the health endpoint.
    Primary,
    /// Every later module; hosts a placeholder class.
    Secondary,
}

/// One allocated module.
#[derive(Debug, Clone)]
pub struct Module {
    /// 1-based allocation slot
    pub index: usize,
    pub name: String,
    pub role: ModuleRole,
}

/// What to do when a directory creation or file write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Log the failure to stderr and keep generating the remaining files.
    #[default]
    BestEffort,
    /// Abort on the first failure.
    FailFast,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub project_dir: PathBuf,
    /// Allocated modules in allocation order
    pub modules: Vec<Module>,
    pub files_written: usize,
    /// Writes that failed under [`FailureMode::BestEffort`]
    pub failures: usize,
}

/// Scaffold the project: root directory, per-module descriptors and sources,
/// then the aggregator descriptor listing every module in allocation order.
///
/// Name allocation errors always abort; I/O failures follow `mode`. There is
/// no rollback: a failed run leaves whatever was written so far on disk.
///
/// # Errors
///
/// Returns an error if name allocation fails, or on the first I/O failure
/// under [`FailureMode::FailFast`]
pub fn generate_project(
    project: &Project,
    names: &mut dyn NameSource,
    extra_dependencies: &[MavenDependency],
    mode: FailureMode,
) -> anyhow::Result<GenerationReport> {
    let project_dir = project.project_dir();
    let mut report = GenerationReport {
        project_dir: project_dir.clone(),
        ..GenerationReport::default()
    };

    if let Err(err) = fs::create_dir_all(&project_dir)
        .with_context(|| format!("Failed to create project directory {project_dir:?}"))
    {
        fail_or_log(&mut report, mode, err)?;
    }

    let mut taken = HashSet::new();
    for index in 1..=project.module_count {
        let name = allocate_module_name(names, index, &taken)?;
        taken.insert(name.clone());
        let role = if index == 1 {
            ModuleRole::Primary
        } else {
            ModuleRole::Secondary
        };
        let module = Module { index, name, role };

        let module_dir = project_dir.join(&module.name);
        if let Err(err) = fs::create_dir_all(&module_dir)
            .with_context(|| format!("Failed to create module directory {module_dir:?}"))
        {
            fail_or_log(&mut report, mode, err)?;
        }

        record(
            &mut report,
            mode,
            write_module_pom(
                &module_dir,
                &project.package,
                &project.name,
                &project.version,
                &module.name,
            ),
        )?;

        match module.role {
            ModuleRole::Primary => {
                let src = source_dir(&module_dir, &project.package, &module.name, None);
                record(
                    &mut report,
                    mode,
                    write_main_application(&src, &project.package, &module.name),
                )?;
                let controllers = source_dir(
                    &module_dir,
                    &project.package,
                    &module.name,
                    Some(CONTROLLERS_SUFFIX),
                );
                record(
                    &mut report,
                    mode,
                    write_health_check_controller(&controllers, &project.package, &module.name),
                )?;
            }
            ModuleRole::Secondary => {
                let src = source_dir(&module_dir, &project.package, &module.name, None);
                record(
                    &mut report,
                    mode,
                    write_sample_class(&src, &project.package, &module.name),
                )?;
            }
        }

        report.modules.push(module);
    }

    let module_names: Vec<String> = report.modules.iter().map(|m| m.name.clone()).collect();
    let dependencies = aggregator_dependencies(extra_dependencies);
    record(
        &mut report,
        mode,
        write_aggregator_pom(
            &project_dir,
            &project.package,
            &project.name,
            &project.version,
            &project.java_version,
            &module_names,
            &dependencies,
        ),
    )?;

    Ok(report)
}

fn record(
    report: &mut GenerationReport,
    mode: FailureMode,
    result: anyhow::Result<PathBuf>,
) -> anyhow::Result<()> {
    match result {
        Ok(_) => {
            report.files_written += 1;
            Ok(())
        }
        Err(err) => fail_or_log(report, mode, err),
    }
}

fn fail_or_log(
    report: &mut GenerationReport,
    mode: FailureMode,
    err: anyhow::Error,
) -> anyhow::Result<()> {
    match mode {
        FailureMode::FailFast => Err(err),
        FailureMode::BestEffort => {
            error!("{err:#}");
            report.failures += 1;
            Ok(())
        }
    }
}
