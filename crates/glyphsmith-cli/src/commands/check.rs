//! Check command

use anyhow::{Context, Result};

/// Fail when the generated files differ from what a build would write
pub async fn run(config_path: &str) -> Result<()> {
    let config = super::load_config(config_path)?;

    let plan = super::generator(&config)
        .plan()
        .await
        .context("Failed to plan build")?;
    let drift = plan.check().await.context("Failed to compare output")?;

    if drift.is_empty() {
        tracing::info!("✓ {} components up to date", plan.components.len());
        return Ok(());
    }

    for d in &drift {
        println!("{d}");
    }
    anyhow::bail!(
        "{} generated files are out of date, run `glyphsmith build`",
        drift.len()
    )
}
