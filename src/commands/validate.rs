use anyhow::{Context, Result};
use std::path::PathBuf;
use stillwater::Validation;

use super::load_customization;
use crate::errors::DashboardError;
use crate::observability::init_logging;

pub struct ValidateConfig {
    pub config: Option<PathBuf>,
    pub verbosity: u8,
}

/// Counts printed after a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    pub tabs: usize,
    pub charts: usize,
    pub components: usize,
}

/// Validate and collect every problem, without printing
pub fn check(config: &ValidateConfig) -> Result<std::result::Result<ValidationSummary, Vec<DashboardError>>> {
    let customization = load_customization(config.config.as_deref())?;

    Ok(match customization.validation() {
        Validation::Success(()) => Ok(ValidationSummary {
            tabs: customization.config.dashboard.tabs.len(),
            charts: customization.config.all_charts().count(),
            components: customization.components.len(),
        }),
        Validation::Failure(errors) => Err(errors.into_vec()),
    })
}

/// Validate configuration and registry, printing every problem
pub fn validate_customization(config: ValidateConfig) -> Result<()> {
    init_logging(config.verbosity, None).context("Failed to set up logging")?;

    match check(&config)? {
        Ok(summary) => {
            println!(
                "✓ Configuration is valid: {} tabs, {} charts, {} components",
                summary.tabs, summary.charts, summary.components
            );
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("✗ {}", error);
            }
            anyhow::bail!("Validation failed with {} error(s)", errors.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_reports_every_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.toml");

        let mut app_config = crate::config::presets::bridges_config();
        app_config.dashboard.tabs[0].id = "reports".into();
        app_config
            .dashboard
            .charts
            .get_mut("dealsByStage")
            .unwrap()
            .colors
            .clear();
        fs::write(&path, toml::to_string(&app_config).unwrap()).unwrap();

        let errors = check(&ValidateConfig {
            config: Some(path),
            verbosity: 0,
        })
        .unwrap()
        .unwrap_err();

        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), 2, "{:?}", messages);
        assert!(messages.iter().any(|m| m.contains("dashboard.dealsByStage")));
        assert!(messages.iter().any(|m| m.contains("'reports'")));
    }

    #[test]
    fn test_unparseable_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.toml");
        fs::write(
            &path,
            indoc! {r#"
                title = "Broken"
                [features]
                impactMetrics = "yes"
            "#},
        )
        .unwrap();

        let result = check(&ValidateConfig {
            config: Some(path),
            verbosity: 0,
        });
        assert!(result.is_err());
    }
}
