use anyhow::{Context, Result};
use std::path::PathBuf;

use super::load_customization;
use crate::observability::init_logging;
use crate::tui::{render_to_string, DashboardApp};

pub struct RenderConfig {
    pub config: Option<PathBuf>,
    pub tab: Option<String>,
    pub width: u16,
    pub height: u16,
    pub verbosity: u8,
}

/// Render one frame of the dashboard to plain text
pub fn render_frame(config: &RenderConfig) -> Result<String> {
    if config.width == 0 || config.height == 0 {
        anyhow::bail!(
            "Frame size must be non-zero, got {}x{}",
            config.width,
            config.height
        );
    }

    let customization = load_customization(config.config.as_deref())?;
    let mut app = DashboardApp::new(customization);
    if let Some(tab) = &config.tab {
        app = app.with_initial_tab(tab)?;
    }

    render_to_string(&mut app, config.width, config.height).context("Failed to render frame")
}

pub fn render_dashboard(config: RenderConfig) -> Result<()> {
    init_logging(config.verbosity, None).context("Failed to set up logging")?;
    println!("{}", render_frame(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_config(tab: Option<&str>) -> RenderConfig {
        RenderConfig {
            config: Some(PathBuf::from("/nonexistent/impact-dashboard.toml")),
            tab: tab.map(String::from),
            width: 100,
            height: 30,
            verbosity: 0,
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let mut config = render_config(None);
        config.width = 0;
        let err = render_frame(&config).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = render_frame(&render_config(None)).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
