//! Index and metadata manifests
//!
//! The index re-exports every component in discovery order. The metadata
//! module default-exports a flat `key → component name` table.

use minijinja::context;
use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::error::{Error, Result};
use crate::templates::{self, INDEX_TEMPLATE};

/// Aggregated component names and metadata keys for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Component names in discovery order
    pub components: Vec<String>,

    /// Kebab-case key → component name
    pub metadata: BTreeMap<String, String>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated component
    ///
    /// Names already present keep their position. A key collision between
    /// two different names is resolved last-write-wins.
    pub fn push(&mut self, name: &str) {
        if !self.components.iter().any(|existing| existing == name) {
            self.components.push(name.to_string());
        }

        let key = glyphsmith_core::metadata_key(name);
        if let Some(previous) = self.metadata.insert(key.clone(), name.to_string())
            && previous != name
        {
            tracing::warn!(
                "Metadata key '{}' maps to both {} and {}, keeping {}",
                key,
                previous,
                name,
                name
            );
        }
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component was recorded
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Render the index module
    ///
    /// `import_dir` is the output directory as seen from the index file,
    /// e.g. `./components`.
    pub fn render_index(&self, import_dir: &str) -> Result<String> {
        let index = templates::environment().render_str(
            INDEX_TEMPLATE,
            context! {
                components => &self.components,
                import_dir => import_dir,
            },
        )?;
        Ok(index)
    }

    /// Render the metadata module
    pub fn render_metadata(&self) -> Result<String> {
        let table = serde_json::to_string(&self.metadata)?;
        Ok(format!("export default {table};\n"))
    }
}

/// Relative module path from `from_dir` to `to_dir`, always starting with `.`
///
/// Both directories must be absolute.
/// `("/p/src", "/p/src/components")` → `./components`,
/// `("/p/dist", "/p/src/components")` → `../src/components`.
pub fn relative_import_path(from_dir: &Path, to_dir: &Path) -> Result<String> {
    let unreachable = || Error::ImportPath {
        from: from_dir.display().to_string(),
        to: to_dir.display().to_string(),
    };

    if !from_dir.is_absolute() || !to_dir.is_absolute() {
        return Err(unreachable());
    }

    let relative = pathdiff::diff_paths(to_dir, from_dir).ok_or_else(unreachable)?;
    let parts = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str().map(str::to_string),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Option<Vec<String>>>()
        .ok_or_else(unreachable)?;

    Ok(match parts.first().map(String::as_str) {
        None => ".".to_string(),
        Some("..") => parts.join("/"),
        Some(_) => format!("./{}", parts.join("/")),
    })
}
