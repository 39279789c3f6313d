//! Component generator
//!
//! Runs the whole pipeline: discover assets, transform each one in memory,
//! then replace the output directory and write both manifests.
//!
//! A run is split into [`Generator::plan`] (pure, nothing written) and
//! [`BuildPlan::commit`]. A transform failure under the abort policy therefore
//! leaves the filesystem untouched.

use glyphsmith_core::{Config, OnError, check_output_paths, discover_assets, resolve_path};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::manifest::{Manifest, relative_import_path};
use crate::transform::{SvgTransform, TransformContext};

/// Suffix of the sibling directory new components are written to
const STAGING_SUFFIX: &str = "staging";

/// Paths and policy for a generator run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Directory containing the `*.svg` assets
    pub input_dir: PathBuf,

    /// Directory replaced by the generated components
    pub output_dir: PathBuf,

    /// Index manifest path
    pub index_file: PathBuf,

    /// Metadata manifest path
    pub metadata_file: PathBuf,

    /// Per-asset failure policy
    pub on_error: OnError,
}

impl GeneratorOptions {
    /// Resolve every path from a loaded project configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            input_dir: config.input_dir(),
            output_dir: config.output_dir(),
            index_file: config.index_file(),
            metadata_file: config.metadata_file(),
            on_error: config.project.on_error,
        }
    }

    /// Resolve every path and reject layouts where resetting the output
    /// directory would touch the input directory or a manifest
    pub fn resolve(&self) -> Result<Self> {
        let resolved = Self {
            input_dir: resolve_path(&self.input_dir)?,
            output_dir: resolve_path(&self.output_dir)?,
            index_file: resolve_path(&self.index_file)?,
            metadata_file: resolve_path(&self.metadata_file)?,
            on_error: self.on_error,
        };
        check_output_paths(
            &resolved.input_dir,
            &resolved.output_dir,
            &[&resolved.index_file, &resolved.metadata_file],
        )?;
        Ok(resolved)
    }
}

/// Component generator
pub struct Generator<T: SvgTransform> {
    transform: T,
    transform_options: T::Options,
    options: GeneratorOptions,
}

impl<T: SvgTransform> Generator<T> {
    /// Create a generator driving `transform` with `transform_options`
    pub fn new(transform: T, transform_options: T::Options, options: GeneratorOptions) -> Self {
        Self {
            transform,
            transform_options,
            options,
        }
    }

    /// Generator options
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Plan and commit in one go
    pub async fn run(&self) -> Result<BuildReport> {
        let plan = self.plan().await?;
        plan.commit().await
    }

    /// Transform every asset in memory without writing anything
    pub async fn plan(&self) -> Result<BuildPlan> {
        let options = self.options.resolve()?;
        let assets = discover_assets(&options.input_dir)?;
        tracing::info!("Icon amount: {}", assets.len());

        let mut components: Vec<GeneratedComponent> = Vec::with_capacity(assets.len());
        let mut skipped = Vec::new();
        let mut manifest = Manifest::new();

        for asset in &assets {
            let component = match self.generate(&asset.path).await {
                Ok(component) => component,
                Err(e) if options.on_error == OnError::Skip => {
                    tracing::warn!("Skipping {}: {}", asset.file_name, e);
                    skipped.push(SkippedAsset {
                        path: asset.path.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            tracing::debug!("  ✓ {} → {}", asset.file_name, component.file_name);
            manifest.push(&component.name);

            match components.iter_mut().find(|c| c.name == component.name) {
                Some(existing) => {
                    tracing::warn!(
                        "{} and {} both generate {}, keeping the latter",
                        existing.source.display(),
                        component.source.display(),
                        component.file_name
                    );
                    *existing = component;
                }
                None => components.push(component),
            }
        }

        let index_dir = options.index_file.parent().unwrap_or(Path::new("/"));
        let import_dir = relative_import_path(index_dir, &options.output_dir)?;

        Ok(BuildPlan {
            output_dir: options.output_dir,
            index_file: options.index_file,
            metadata_file: options.metadata_file,
            index_source: manifest.render_index(&import_dir)?,
            metadata_source: manifest.render_metadata()?,
            components,
            skipped,
            manifest,
        })
    }

    /// Read, transform and name a single asset
    async fn generate(&self, path: &Path) -> Result<GeneratedComponent> {
        let svg = tokio::fs::read(path).await.map_err(|source| Error::ReadAsset {
            path: path.display().to_string(),
            source,
        })?;

        let ctx = TransformContext::new(path);
        let code = self
            .transform
            .transform(&svg, &self.transform_options, &ctx)
            .await?;
        let name = self.transform.component_name(&ctx);
        let file_name = format!(
            "{}.{}",
            name,
            self.transform.extension(&self.transform_options)
        );

        Ok(GeneratedComponent {
            name,
            source: path.to_path_buf(),
            file_name,
            code,
        })
    }
}

/// One generated component held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    /// Component (export) name
    pub name: String,

    /// Asset it was generated from
    pub source: PathBuf,

    /// File name inside the output directory, e.g. `Home.tsx`
    pub file_name: String,

    /// Generated source text
    pub code: String,
}

/// An asset left out under the skip policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAsset {
    /// Asset path
    pub path: PathBuf,

    /// Why it was skipped
    pub reason: String,
}

/// Everything a run would write, computed without touching the filesystem
#[derive(Debug, Clone)]
pub struct BuildPlan {
    /// Output directory to replace
    pub output_dir: PathBuf,

    /// Index manifest path
    pub index_file: PathBuf,

    /// Metadata manifest path
    pub metadata_file: PathBuf,

    /// Generated components in discovery order
    pub components: Vec<GeneratedComponent>,

    /// Assets skipped under [`OnError::Skip`]
    pub skipped: Vec<SkippedAsset>,

    /// Aggregated names and metadata keys
    pub manifest: Manifest,

    /// Rendered index module
    pub index_source: String,

    /// Rendered metadata module
    pub metadata_source: String,
}

impl BuildPlan {
    /// Replace the output directory and write both manifests
    pub async fn commit(&self) -> Result<BuildReport> {
        let staging = staging_dir(&self.output_dir)?;

        if let Err(e) = self.write_staging(&staging).await {
            let _ = tokio::fs::remove_dir_all(&staging).await;
            return Err(e);
        }
        self.swap(&staging).await?;
        tracing::info!("Icon components generated!");

        write_file(&self.index_file, &self.index_source).await?;
        tracing::info!("Entry generated: {}", self.index_file.display());

        write_file(&self.metadata_file, &self.metadata_source).await?;
        tracing::info!("Meta data generated: {}", self.metadata_file.display());

        Ok(BuildReport {
            components: self.manifest.components.clone(),
            skipped: self.skipped.clone(),
            output_dir: self.output_dir.clone(),
            index_file: self.index_file.clone(),
            metadata_file: self.metadata_file.clone(),
        })
    }

    /// Compare the plan against what is on disk
    pub async fn check(&self) -> Result<Vec<Drift>> {
        let mut drift = Vec::new();

        for component in &self.components {
            let path = self.output_dir.join(&component.file_name);
            if let Some(d) = compare(&path, &component.code).await? {
                drift.push(d);
            }
        }

        if tokio::fs::try_exists(&self.output_dir).await? {
            let mut entries = tokio::fs::read_dir(&self.output_dir).await?;
            let mut stale = Vec::new();
            while let Some(entry) = entries.next_entry().await? {
                let name = entry.file_name();
                if !self.components.iter().any(|c| name == c.file_name.as_str()) {
                    stale.push(Drift::Stale(entry.path()));
                }
            }
            stale.sort();
            drift.extend(stale);
        }

        for (path, expected) in [
            (&self.index_file, &self.index_source),
            (&self.metadata_file, &self.metadata_source),
        ] {
            if let Some(d) = compare(path, expected).await? {
                drift.push(d);
            }
        }

        Ok(drift)
    }

    async fn write_staging(&self, staging: &Path) -> Result<()> {
        if tokio::fs::try_exists(staging).await? {
            tracing::debug!("Removing leftover staging directory {}", staging.display());
            tokio::fs::remove_dir_all(staging)
                .await
                .map_err(|e| reset_error(staging, e))?;
        }
        tokio::fs::create_dir_all(staging)
            .await
            .map_err(|e| reset_error(staging, e))?;

        for component in &self.components {
            write_file(&staging.join(&component.file_name), &component.code).await?;
        }
        Ok(())
    }

    async fn swap(&self, staging: &Path) -> Result<()> {
        if tokio::fs::try_exists(&self.output_dir).await? {
            tokio::fs::remove_dir_all(&self.output_dir)
                .await
                .map_err(|e| reset_error(&self.output_dir, e))?;
        }
        tokio::fs::rename(staging, &self.output_dir)
            .await
            .map_err(|e| reset_error(&self.output_dir, e))
    }
}

/// What a committed run produced
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Component names in index order
    pub components: Vec<String>,

    /// Assets skipped under [`OnError::Skip`]
    pub skipped: Vec<SkippedAsset>,

    /// Output directory
    pub output_dir: PathBuf,

    /// Index manifest path
    pub index_file: PathBuf,

    /// Metadata manifest path
    pub metadata_file: PathBuf,
}

/// A difference between planned and on-disk output
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Drift {
    /// File the build would create is missing
    Missing(PathBuf),
    /// File exists with different content
    Changed(PathBuf),
    /// File in the output directory the build would delete
    Stale(PathBuf),
}

impl std::fmt::Display for Drift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Drift::Missing(path) => write!(f, "missing: {}", path.display()),
            Drift::Changed(path) => write!(f, "changed: {}", path.display()),
            Drift::Stale(path) => write!(f, "stale:   {}", path.display()),
        }
    }
}

fn staging_dir(output_dir: &Path) -> Result<PathBuf> {
    let name = output_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Reset {
            path: output_dir.display().to_string(),
            message: "output directory has no usable name".to_string(),
        })?;
    let parent = output_dir.parent().unwrap_or(Path::new("."));
    Ok(parent.join(format!(".{name}.{STAGING_SUFFIX}")))
}

fn reset_error(path: &Path, e: std::io::Error) -> Error {
    Error::Reset {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }
    tokio::fs::write(path, contents).await.map_err(write_error)
}

async fn compare(path: &Path, expected: &str) -> Result<Option<Drift>> {
    match tokio::fs::read(path).await {
        Ok(actual) if actual == expected.as_bytes() => Ok(None),
        Ok(_) => Ok(Some(Drift::Changed(path.to_path_buf()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(Some(Drift::Missing(path.to_path_buf())))
        }
        Err(e) => Err(e.into()),
    }
}
