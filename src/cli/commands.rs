use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::generator::{
    generate_project, load_dependencies_config, resolve_config_path, ConsoleNameSource,
    FailureMode, MavenDependency, NameSource, Project, ScriptedNameSource,
};

/// Command-line interface for pomforge
///
/// Scaffolds multi-module Maven projects from a handful of inputs; anything
/// not supplied as a flag is collected interactively.
#[derive(Parser)]
#[command(name = "pomforge")]
#[command(about = "Maven multi-module scaffolding CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for pomforge
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a multi-module Maven project
    New {
        /// Directory in which the project directory is created (prompted if omitted)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Project name, used as the aggregator artifactId (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Base Java package, used as the aggregator groupId (prompted if omitted)
        #[arg(short, long)]
        package: Option<String>,

        /// Number of modules to scaffold (prompted if omitted)
        #[arg(short, long)]
        modules: Option<usize>,

        /// Module names (comma-separated or repeated); skips the interactive
        /// name prompts, but a rejected or missing name aborts the run
        #[arg(long = "module-name", value_delimiter = ',')]
        module_names: Vec<String>,

        /// Version for the aggregator and every module's parent reference
        #[arg(long, default_value = "1.0.0")]
        project_version: String,

        /// Java release for maven.compiler.source/target
        #[arg(long, default_value = "17")]
        java_version: String,

        /// Abort on the first write failure instead of logging it and continuing
        #[arg(long, default_value_t = false)]
        fail_fast: bool,

        /// Path to pomforge-dependencies.toml
        /// If not provided, will auto-detect in the target directory
        #[arg(long)]
        dependencies_config: Option<PathBuf>,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - Console input ends before all project fields are collected
/// - A flag-supplied module name is rejected or the list runs short
/// - The dependencies config exists but fails to parse
/// - A write fails under `--fail-fast`
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New {
            dir,
            name,
            package,
            modules,
            module_names,
            project_version,
            java_version,
            fail_fast,
            dependencies_config,
        } => {
            let root = match dir {
                Some(dir) => dir,
                None => PathBuf::from(prompt_line(
                    "Enter the path of the directory where you want to create the project: ",
                )?),
            };
            let name = match name {
                Some(name) => name,
                None => prompt_line("Enter the project name: ")?,
            };
            let package = match package {
                Some(package) => package,
                None => prompt_line("Enter the package name: ")?,
            };
            let module_count = match modules {
                Some(count) => count,
                None => prompt_module_count()?,
            };

            let extra_dependencies =
                resolve_extra_dependencies(dependencies_config.as_deref(), &root)?;

            let project = Project {
                root,
                name,
                package,
                module_count,
                version: project_version,
                java_version,
            };
            let mode = if fail_fast {
                FailureMode::FailFast
            } else {
                FailureMode::BestEffort
            };

            let mut console = ConsoleNameSource;
            let mut scripted;
            let names: &mut dyn NameSource = if module_names.is_empty() {
                &mut console
            } else {
                scripted = ScriptedNameSource::new(module_names);
                &mut scripted
            };

            let report = generate_project(&project, names, &extra_dependencies, mode)?;

            println!("✅ Project structure and pom.xml files generated successfully!");
            if report.failures > 0 {
                println!(
                    "⚠️  {} file(s) could not be written; see errors above.",
                    report.failures
                );
            }
            Ok(())
        }
    }
}

fn resolve_extra_dependencies(
    explicit: Option<&std::path::Path>,
    target_dir: &std::path::Path,
) -> anyhow::Result<Vec<MavenDependency>> {
    match resolve_config_path(explicit, target_dir) {
        Some(path) => Ok(load_dependencies_config(&path)?
            .map(|config| config.dependencies)
            .unwrap_or_default()),
        None => Ok(Vec::new()),
    }
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_module_count() -> anyhow::Result<usize> {
    loop {
        let line = prompt_line("Enter the number of modules: ")?;
        match line.trim().parse::<usize>() {
            Ok(count) => return Ok(count),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}
