//! Build command

use anyhow::{Context, Result};
use glyphsmith_core::OnError;
use std::path::PathBuf;

/// Generate components, index and metadata for the configured project
pub async fn run(
    config_path: &str,
    input: Option<&str>,
    output: Option<&str>,
    skip_invalid: bool,
) -> Result<()> {
    let mut config = super::load_config(config_path)?;

    if input.is_some() || output.is_some() {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        if let Some(input) = input {
            config.project.input_dir = cwd.join(PathBuf::from(input));
        }
        if let Some(output) = output {
            config.project.output_dir = cwd.join(PathBuf::from(output));
        }
        config
            .validate()
            .context("Invalid --input/--output combination")?;
    }

    if skip_invalid {
        config.project.on_error = OnError::Skip;
    }

    tracing::info!("Building icons from {}", config.input_dir().display());

    let report = match super::generator(&config).run().await {
        Ok(report) => report,
        Err(e) if e.is_input_not_found() => {
            tracing::error!("{}", e);
            anyhow::bail!("No SVG input directory at {}", config.input_dir().display());
        }
        Err(e) => return Err(e).context("Build failed"),
    };

    tracing::info!(
        "✓ Generated {} components in {}",
        report.components.len(),
        report.output_dir.display()
    );
    if !report.skipped.is_empty() {
        tracing::warn!("Skipped {} invalid assets:", report.skipped.len());
        for skipped in &report.skipped {
            tracing::warn!("  {}: {}", skipped.path.display(), skipped.reason);
        }
    }

    Ok(())
}
