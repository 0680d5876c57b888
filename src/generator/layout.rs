//! Directory layout planning for generated projects.
//!
//! All functions here are pure path arithmetic; nothing in this module touches
//! the filesystem. The convention for every generated source file is
//! `<module>/src/main/java/<package-as-path>/<module>[/<suffix>]`.

use std::path::{Path, PathBuf};

/// Relative source root inside every module.
pub const SOURCE_ROOT: [&str; 3] = ["src", "main", "java"];

/// Sub-package segment that hosts HTTP endpoint classes.
pub const CONTROLLERS_SUFFIX: &str = "controllers";

/// Convert a dot-separated package name into a nested directory path.
///
/// Empty segments (from leading, trailing, or doubled dots) are dropped.
pub fn package_path(package: &str) -> PathBuf {
    package.split('.').filter(|seg| !seg.is_empty()).collect()
}

/// Compute the source directory for a module's generated classes.
///
/// Returns `<module_dir>/src/main/java/<package-path>/<module_name>` with an
/// optional trailing `suffix` segment for endpoint sub-packages.
pub fn source_dir(
    module_dir: &Path,
    package: &str,
    module_name: &str,
    suffix: Option<&str>,
) -> PathBuf {
    let mut dir = module_dir.to_path_buf();
    for seg in SOURCE_ROOT {
        dir.push(seg);
    }
    dir.push(package_path(package));
    dir.push(module_name);
    if let Some(suffix) = suffix {
        dir.push(suffix);
    }
    dir
}
