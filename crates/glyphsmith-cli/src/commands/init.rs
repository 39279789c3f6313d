//! Init command

use anyhow::{Context, Result};
use glyphsmith_core::{CONFIG_FILE_NAME, ProjectConfig};
use std::path::Path;

/// Write a default configuration and create the SVG input directory
pub async fn run(path: &str) -> Result<()> {
    let root = Path::new(path);
    let config_file = root.join(CONFIG_FILE_NAME);

    if config_file.exists() {
        anyhow::bail!("{} already exists", config_file.display());
    }

    let project = ProjectConfig::default();
    let yaml = serde_yaml::to_string(&project).context("Failed to serialize configuration")?;

    tokio::fs::create_dir_all(root.join(&project.input_dir))
        .await
        .with_context(|| format!("Failed to create {}", project.input_dir.display()))?;
    tokio::fs::write(&config_file, yaml)
        .await
        .with_context(|| format!("Failed to write {}", config_file.display()))?;

    tracing::info!("✓ Initialized Glyphsmith project at {}", root.display());
    println!("Put your SVG files in {}", root.join(&project.input_dir).display());
    println!("Then run: glyphsmith build");

    Ok(())
}
