//! Tenant configuration: branding, navigation tabs, chart descriptors,
//! clients and feature flags.

mod charts;
mod color;
mod core;
mod loader;
pub mod presets;
pub mod validation;

pub use charts::{ChartConfig, ChartKind, ChartRow, ChartValue};
pub use color::HexColor;
pub use core::{
    AnalyticsSection, AppConfig, ChartSection, Client, DashboardSection, TabConfig, TabIcon,
};
pub use loader::{
    directory_ancestors, discover_config, load_config_from, parse_config, resolve_config,
    CONFIG_FILE_NAME,
};
