//! List command

use anyhow::{Context, Result};
use glyphsmith_core::{component_name, discover_assets, metadata_key};

/// Print every discovered asset with the component name and key it maps to
pub async fn run(config_path: &str, json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let assets = discover_assets(config.input_dir()).context("Failed to discover assets")?;

    let rows: Vec<(String, String, String)> = assets
        .iter()
        .map(|asset| {
            let name = component_name(&asset.path);
            let key = metadata_key(&name);
            (asset.file_name.clone(), name, key)
        })
        .collect();

    if json {
        let value: Vec<serde_json::Value> = rows
            .iter()
            .map(|(file, name, key)| {
                serde_json::json!({ "file": file, "component": name, "key": key })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No SVG assets in {}", config.input_dir().display());
        return Ok(());
    }

    println!("Assets in {}:", config.input_dir().display());
    for (file, name, key) in &rows {
        println!("  {file} → {name} ({key})");
    }

    Ok(())
}
