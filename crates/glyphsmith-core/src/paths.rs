//! Path resolution and overlap checks
//!
//! Generated output replaces the whole output directory, so the input
//! directory and both manifests must stay out of it. Comparisons are made on
//! resolved paths:
//!
//! - [`resolve_path`] - absolute form with `.`/`..` folded and symlinks
//!   resolved for the part of the path that exists
//! - [`check_output_paths`] - reject layouts where a run would wipe its inputs

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `path` to an absolute, canonical form
///
/// The path does not have to exist. The longest existing ancestor is
/// canonicalized and the remaining components are appended as written.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };

    let absolute = fold_dots(&std::path::absolute(path)?);

    let mut tail = Vec::new();
    let mut existing = absolute.as_path();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return Ok(tail.iter().rev().fold(canonical, |acc, part| acc.join(part)));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }
}

fn fold_dots(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other),
        }
    }
    folded
}

/// Reject layouts where replacing `output_dir` would touch the inputs
///
/// All paths must already be resolved. `output_dir` may neither equal nor
/// contain `input_dir`, may not live inside it, and may not contain any of
/// the manifests.
pub fn check_output_paths(
    input_dir: &Path,
    output_dir: &Path,
    manifests: &[&Path],
) -> Result<()> {
    if output_dir == input_dir {
        return Err(invalid(format!(
            "output_dir '{}' must differ from input_dir, it is wiped on every run",
            output_dir.display()
        )));
    }

    if input_dir.starts_with(output_dir) {
        return Err(invalid(format!(
            "output_dir '{}' contains input_dir '{}', it is wiped on every run",
            output_dir.display(),
            input_dir.display()
        )));
    }

    if output_dir.starts_with(input_dir) {
        return Err(invalid(format!(
            "output_dir '{}' must not live inside input_dir '{}'",
            output_dir.display(),
            input_dir.display()
        )));
    }

    for manifest in manifests {
        if manifest.starts_with(output_dir) {
            return Err(invalid(format!(
                "manifest '{}' must live outside output_dir '{}'",
                manifest.display(),
                output_dir.display()
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> Error {
    Error::ConfigInvalid { message }
}
