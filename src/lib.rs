//! Dashboard customization for Bridges Fund Management.
//!
//! The crate exports a tenant customization (branding, navigation tabs,
//! chart descriptors, clients and feature flags), a registry of view
//! components keyed by tab id, and supplementary data. The [`tui`] module
//! is a host shell that consumes that export surface.

pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod customization;
pub mod data;
pub mod errors;
pub mod formatting;
pub mod observability;
pub mod tui;

pub use crate::components::{ComponentRegistry, DashboardComponent, RenderContext};
pub use crate::config::{AppConfig, ChartConfig, ChartKind, HexColor, TabConfig, TabIcon};
pub use crate::customization::{Customization, ExportedCustomization};
pub use crate::data::CustomData;
pub use crate::errors::{DashboardError, Result};
