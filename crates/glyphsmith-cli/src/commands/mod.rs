//! CLI command implementations

pub mod build;
pub mod check;
pub mod init;
pub mod list;

use anyhow::{Context, Result};
use glyphsmith_codegen::{Generator, GeneratorOptions, JsxTransform};
use glyphsmith_core::Config;

/// Load the project configuration, falling back to defaults when absent
pub fn load_config(config_path: &str) -> Result<Config> {
    tracing::debug!("Loading configuration from {}", config_path);
    Config::load_or_default(config_path).context("Failed to load configuration")
}

/// Generator using the bundled JSX transform and the project's options
pub fn generator(config: &Config) -> Generator<JsxTransform> {
    Generator::new(
        JsxTransform::new(),
        config.project.transform.clone(),
        GeneratorOptions::from_config(config),
    )
}
