use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::presets::bridges_config;

const HEADER: &str = "# Impact dashboard configuration\n\
# Generated from the built-in Bridges Fund Management preset.\n\n";

/// Built-in tenant configuration rendered as commented TOML
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&bridges_config())
        .context("Failed to serialize built-in configuration")?;
    Ok(format!("{}{}", HEADER, body))
}

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Configuration file {} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::write(path, default_config_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {} configuration file", path.display());

    Ok(())
}
