//! File collection utilities for indexing
//!
//! Recursively collects Kotlin sources from a directory, skipping hidden
//! and build output directories.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Lang;

/// Collect all Kotlin source files under `dir`.
///
/// # Arguments
///
/// * `dir` - The root directory to search
/// * `max_depth` - Maximum recursion depth (0 = only root directory)
/// * `exclude` - Extra directory names to skip
///
/// # Returns
///
/// Paths of supported source files, sorted by path.
pub fn collect_files(dir: &Path, max_depth: usize, exclude: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_files_recursive(dir, max_depth, 0, exclude, &mut files);
    files.sort();
    files
}

/// Recursively collect files with depth tracking.
///
/// This is the internal recursive implementation. Use `collect_files` for
/// the public API.
pub fn collect_files_recursive(
    dir: &Path,
    max_depth: usize,
    current_depth: usize,
    exclude: &[String],
    files: &mut Vec<PathBuf>,
) {
    if current_depth > max_depth {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if should_skip_path(&path) || is_excluded(&path, exclude) {
            continue;
        }

        if path.is_dir() {
            collect_files_recursive(&path, max_depth, current_depth + 1, exclude, files);
        } else if path.is_file() && Lang::from_path(&path).is_ok() {
            files.push(path);
        }
    }
}

/// Check if a path should be skipped during file collection.
///
/// Skips:
/// - Hidden files/directories (starting with '.')
/// - Build output and tool directories: build, out, target, node_modules
pub fn should_skip_path(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        name.starts_with('.')
            || name == "build"
            || name == "out"
            || name == "target"
            || name == "node_modules"
    } else {
        false
    }
}

fn is_excluded(path: &Path, exclude: &[String]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| exclude.iter().any(|e| e == name))
}
