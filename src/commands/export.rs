use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::load_customization;
use crate::cli::ExportFormat;
use crate::customization::Customization;
use crate::errors::DashboardError;
use crate::observability::init_logging;

pub struct ExportConfig {
    pub config: Option<PathBuf>,
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
}

/// Serialize the export surface in the requested format
pub fn serialize_customization(
    customization: &Customization,
    format: ExportFormat,
) -> std::result::Result<String, DashboardError> {
    let exported = customization.export();
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&exported)?,
        ExportFormat::Toml => toml::to_string_pretty(&exported)?,
    };
    Ok(text)
}

pub fn export_customization(config: ExportConfig) -> Result<()> {
    init_logging(config.verbosity, None).context("Failed to set up logging")?;

    let customization = load_customization(config.config.as_deref())?;
    let text = serialize_customization(&customization, config.format)?;

    match &config.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "customization exported");
        }
        None => println!("{}", text),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_uses_camel_case_keys() {
        let text =
            serialize_customization(&Customization::bridges(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value["config"]["companyName"],
            "Bridges Fund Management"
        );
        assert!(value["config"]["dashboard"]["charts"]["dealsByStage"]["dataKeys"].is_array());
        assert_eq!(value["config"]["analytics"]["charts"]["revenueGrowth"]["type"], "line");
        assert_eq!(value["components"].as_array().unwrap().len(), 3);
        assert!(value["data"]["investmentStages"].is_array());
    }

    #[test]
    fn test_toml_export_contains_sections() {
        let text =
            serialize_customization(&Customization::bridges(), ExportFormat::Toml).unwrap();
        assert!(text.contains("components = ["));
        assert!(text.contains("companyName = \"Bridges Fund Management\""));
    }
}
