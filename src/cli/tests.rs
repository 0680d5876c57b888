//! Unit tests for CLI commands

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_new_command_parses_all_flags() {
    let cli = Cli::try_parse_from([
        "pomforge",
        "new",
        "--dir",
        "/tmp",
        "--name",
        "demo",
        "--package",
        "org.acme",
        "--modules",
        "2",
        "--module-name",
        "core",
        "--module-name",
        "util",
        "--fail-fast",
    ])
    .unwrap();

    match cli.command {
        Commands::New {
            dir,
            name,
            package,
            modules,
            module_names,
            fail_fast,
            ..
        } => {
            assert_eq!(dir.unwrap().to_string_lossy(), "/tmp");
            assert_eq!(name.as_deref(), Some("demo"));
            assert_eq!(package.as_deref(), Some("org.acme"));
            assert_eq!(modules, Some(2));
            assert_eq!(module_names, vec!["core", "util"]);
            assert!(fail_fast);
        }
    }
}

#[test]
fn test_new_command_defaults() {
    let cli = Cli::try_parse_from(["pomforge", "new"]).unwrap();

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
            assert!(dir.is_none());
            assert!(name.is_none());
            assert!(package.is_none());
            assert!(modules.is_none());
            assert!(module_names.is_empty());
            assert_eq!(project_version, "1.0.0");
            assert_eq!(java_version, "17");
            assert!(!fail_fast);
            assert!(dependencies_config.is_none());
        }
    }
}

#[test]
fn test_module_names_accept_comma_delimiter() {
    let cli = Cli::try_parse_from(["pomforge", "new", "--module-name", "core,util,web"]).unwrap();

    match cli.command {
        Commands::New { module_names, .. } => {
            assert_eq!(module_names, vec!["core", "util", "web"]);
        }
    }
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["pomforge", "serve"]).is_err());
}
