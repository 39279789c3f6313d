//! SVG asset discovery
//!
//! Lists the `*.svg` files directly inside the input directory. The listing
//! is sorted by file name so repeated runs process assets in the same order
//! on every platform.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension of discovered assets (compared case-insensitively)
pub const ASSET_EXTENSION: &str = "svg";

/// A discovered input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Absolute path to the SVG file
    pub path: PathBuf,

    /// File name including extension, e.g. `user-profile.svg`
    pub file_name: String,
}

/// Discover every SVG asset in `input_dir`
///
/// Fails with [`Error::InputNotFound`] when the directory is missing, before
/// anything else happens.
pub fn discover_assets(input_dir: impl AsRef<Path>) -> Result<Vec<Asset>> {
    let input_dir = input_dir.as_ref();

    if !input_dir.is_dir() {
        return Err(Error::InputNotFound {
            path: input_dir.display().to_string(),
        });
    }

    let root = input_dir.canonicalize()?;
    let mut assets = Vec::new();

    for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => Error::Io(io),
            None => Error::Io(std::io::Error::other("filesystem loop while listing assets")),
        })?;

        // Symlinked assets count; broken links and directories do not
        if !entry.path().is_file() || !is_svg(entry.path()) {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            tracing::warn!(
                "Skipping asset with non UTF-8 name: {}",
                entry.path().display()
            );
            continue;
        };

        assets.push(Asset {
            path: root.join(file_name),
            file_name: file_name.to_string(),
        });
    }

    assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    tracing::debug!("Discovered {} assets in {}", assets.len(), root.display());

    Ok(assets)
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ASSET_EXTENSION))
}
