//! Configuration parsing and defaults
//!
//! This module handles loading Glyphsmith project configuration.
//!
//! # Configuration Files
//!
//! - `glyphsmith.yaml` - Project root configuration. Every field is optional;
//!   a project without the file runs with [`Config::default_for`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::{check_output_paths, resolve_path};
use crate::transforms::TransformConfig;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "glyphsmith.yaml";

/// Root project configuration from `glyphsmith.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory containing the `*.svg` assets
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving one generated component per asset
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Index manifest path (defaults to `index.ts` next to the output directory)
    #[serde(default)]
    pub index_file: Option<PathBuf>,

    /// Metadata manifest path (defaults to `metadata.ts` next to the output directory)
    #[serde(default)]
    pub metadata_file: Option<PathBuf>,

    /// What to do when a single asset fails to transform
    #[serde(default)]
    pub on_error: OnError,

    /// Options forwarded to the transform
    #[serde(default)]
    pub transform: TransformConfig,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("src/svg")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("src/components")
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            index_file: None,
            metadata_file: None,
            on_error: OnError::default(),
            transform: TransformConfig::default(),
        }
    }
}

/// Per-asset failure policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Abort the whole run on the first failing asset
    #[default]
    Abort,
    /// Skip the failing asset with a warning and continue
    Skip,
}

/// Main configuration container
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Base path of the project
    pub base_path: PathBuf,
}

impl Config {
    /// Load configuration from a directory
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the project directory or glyphsmith.yaml file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = Config::load("./my-icons")?;
    /// println!("Input: {}", config.input_dir().display());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let (config_path, base_path) = if path.is_dir() {
            (path.join(CONFIG_FILE_NAME), path.to_path_buf())
        } else {
            (
                path.to_path_buf(),
                path.parent().unwrap_or(Path::new(".")).to_path_buf(),
            )
        };

        if !config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let project: ProjectConfig = serde_yaml::from_str(&contents)?;
        let config = Self { project, base_path };
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", config_path.display());

        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(Error::ConfigNotFound { path: missing }) => {
                tracing::debug!("No configuration at {}, using defaults", missing);
                let base = if path.as_ref().is_dir() {
                    path.as_ref()
                } else {
                    path.as_ref().parent().unwrap_or(Path::new("."))
                };
                Ok(Self::default_for(base))
            }
            other => other,
        }
    }

    /// Default configuration rooted at `base_path`
    pub fn default_for(base_path: impl Into<PathBuf>) -> Self {
        Self {
            project: ProjectConfig::default(),
            base_path: base_path.into(),
        }
    }

    /// Absolute-or-relative input directory resolved against the base path
    pub fn input_dir(&self) -> PathBuf {
        self.base_path.join(&self.project.input_dir)
    }

    /// Output directory resolved against the base path
    pub fn output_dir(&self) -> PathBuf {
        self.base_path.join(&self.project.output_dir)
    }

    /// Index manifest path, one level above the output directory by default
    pub fn index_file(&self) -> PathBuf {
        match &self.project.index_file {
            Some(path) => self.base_path.join(path),
            None => self.manifest_dir().join("index.ts"),
        }
    }

    /// Metadata manifest path, alongside the index by default
    pub fn metadata_file(&self) -> PathBuf {
        match &self.project.metadata_file {
            Some(path) => self.base_path.join(path),
            None => self.manifest_dir().join("metadata.ts"),
        }
    }

    fn manifest_dir(&self) -> PathBuf {
        self.output_dir()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_path.clone())
    }
}

impl Config {
    /// Check that a run cannot wipe its own inputs
    ///
    /// Paths are compared after resolving them against the base path, so
    /// `output_dir: src` or an absolute override of `src/svg` is caught.
    pub fn validate(&self) -> Result<()> {
        self.project.validate()?;

        let index_file = resolve_path(self.index_file())?;
        let metadata_file = resolve_path(self.metadata_file())?;
        check_output_paths(
            &resolve_path(self.input_dir())?,
            &resolve_path(self.output_dir())?,
            &[&index_file, &metadata_file],
        )
    }
}

impl ProjectConfig {
    /// Check the fields that are invalid regardless of where the project lives
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::ConfigInvalid {
                message: "output_dir must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
