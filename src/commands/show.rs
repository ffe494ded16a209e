use anyhow::{Context, Result};
use std::path::PathBuf;

use super::load_customization;
use crate::errors::DashboardError;
use crate::observability::init_logging;
use crate::tui::{DashboardApp, DashboardShell};

pub struct ShowConfig {
    pub config: Option<PathBuf>,
    pub tab: Option<String>,
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

/// Open the interactive dashboard and block until the user quits
pub fn show_dashboard(config: ShowConfig) -> Result<()> {
    init_logging(config.verbosity, config.log_file.as_deref())
        .context("Failed to set up logging")?;

    let customization = load_customization(config.config.as_deref())?;

    // Broken registries still open; the shell shows placeholders instead
    if let Err(err) = customization.validate() {
        tracing::warn!("{}", err);
    }

    let mut app = DashboardApp::new(customization);
    if let Some(tab) = &config.tab {
        app = app.with_initial_tab(tab)?;
    }

    let mut shell =
        DashboardShell::new(app).map_err(|e| DashboardError::Terminal(e.to_string()))?;
    shell
        .run()
        .map_err(|e| DashboardError::Terminal(e.to_string()))?;

    Ok(())
}
