//! CLI command implementations.
//!
//! Available commands:
//! - **show**: Open the interactive dashboard
//! - **render**: Print one off-screen frame as plain text
//! - **validate**: Report every configuration and registry problem
//! - **export**: Serialize the customization to JSON or TOML
//! - **init**: Write the built-in tenant configuration to disk

pub mod export;
pub mod init;
pub mod render;
pub mod show;
pub mod validate;

pub use export::{export_customization, ExportConfig};
pub use init::init_config;
pub use render::{render_dashboard, render_frame, RenderConfig};
pub use show::{show_dashboard, ShowConfig};
pub use validate::{validate_customization, ValidateConfig};

use std::path::Path;

use crate::config::resolve_config;
use crate::customization::Customization;
use crate::errors::Result;

/// Build the customization for a command from an optional config path
pub fn load_customization(config: Option<&Path>) -> Result<Customization> {
    let app_config = resolve_config(config)?;
    tracing::info!(
        company = %app_config.company_name,
        tabs = app_config.dashboard.tabs.len(),
        "configuration loaded"
    );
    Ok(Customization::with_config(app_config))
}
