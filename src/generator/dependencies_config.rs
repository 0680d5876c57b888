//! Dependency configuration for generated aggregator descriptors.
//!
//! Allows projects to append extra Maven dependencies via a TOML config file
//! that sits in the target directory:
//!
//! ```toml
//! [[dependency]]
//! groupId = "org.postgresql"
//! artifactId = "postgresql"
//! version = "42.7.3"
//! scope = "runtime"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the target directory.
pub const DEPENDENCIES_CONFIG_FILE: &str = "pomforge-dependencies.toml";

/// `<exclusion>` entry inside a dependency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MavenExclusion {
    pub group_id: String,
    pub artifact_id: String,
}

/// One `<dependency>` entry for the aggregator descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MavenDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Maven scope (`compile` when absent, so only emitted when set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<MavenExclusion>,
}

/// Dependency configuration loaded from `pomforge-dependencies.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DependenciesConfig {
    /// Dependencies appended to the aggregator's built-in set, in file order.
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<MavenDependency>,
}

/// The aggregator's built-in dependency set.
///
/// Spring Boot web starter with its default logging stack excluded.
pub fn default_dependencies() -> Vec<MavenDependency> {
    vec![MavenDependency {
        group_id: "org.springframework.boot".to_string(),
        artifact_id: "spring-boot-starter-web".to_string(),
        version: "2.5.5".to_string(),
        scope: None,
        exclusions: vec![
            MavenExclusion {
                group_id: "org.springframework.boot".to_string(),
                artifact_id: "spring-boot-starter-logging".to_string(),
            },
            MavenExclusion {
                group_id: "ch.qos.logback".to_string(),
                artifact_id: "logback-classic".to_string(),
            },
        ],
    }]
}

/// Built-in dependencies followed by the configured extras, in order.
pub fn aggregator_dependencies(extra: &[MavenDependency]) -> Vec<MavenDependency> {
    let mut dependencies = default_dependencies();
    dependencies.extend_from_slice(extra);
    dependencies
}

/// Load dependencies configuration from a TOML file.
///
/// Returns `Ok(Some(config))` if the file exists and parses,
/// `Ok(None)` if the file doesn't exist (not an error),
/// `Err` if the file exists but fails to parse.
pub fn load_dependencies_config(config_path: &Path) -> anyhow::Result<Option<DependenciesConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!(
            "Failed to read dependencies config: {}",
            config_path.display()
        )
    })?;

    let config: DependenciesConfig = toml::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse dependencies config: {}",
            config_path.display()
        )
    })?;

    Ok(Some(config))
}

/// Auto-detect a dependencies config file in the target directory.
pub fn auto_detect_config_path(target_dir: &Path) -> Option<PathBuf> {
    let config_path = target_dir.join(DEPENDENCIES_CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the dependencies config path.
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. Auto-detected in the target directory
/// 3. None (no config)
pub fn resolve_config_path(explicit_path: Option<&Path>, target_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    auto_detect_config_path(target_dir)
}
