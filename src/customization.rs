//! The export surface a host shell consumes: configuration, component
//! registry and supplementary data.
//!
//! # Example
//!
//! ```rust
//! use impact_dashboard::Customization;
//!
//! let customization = Customization::bridges();
//! customization.validate().expect("built-in customization is consistent");
//!
//! for tab in &customization.config.dashboard.tabs {
//!     assert!(customization.components.contains(&tab.id));
//! }
//! ```

use serde::Serialize;

use crate::components::ComponentRegistry;
use crate::config::presets::bridges_config;
use crate::config::validation::{
    combine_validations, from_errors, run_validation, validate_config, DashboardValidation,
};
use crate::config::AppConfig;
use crate::data::CustomData;
use crate::errors::{DashboardError, Result};

/// Tenant customization: `config`, `components` and `data`
#[derive(Debug)]
pub struct Customization {
    pub config: AppConfig,
    pub components: ComponentRegistry,
    pub data: CustomData,
}

impl Customization {
    pub fn new(config: AppConfig, components: ComponentRegistry, data: CustomData) -> Self {
        Self {
            config,
            components,
            data,
        }
    }

    /// Customization for Bridges Fund Management
    pub fn bridges() -> Self {
        Self::with_config(bridges_config())
    }

    /// Bridges components and data over a different configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self::new(config, ComponentRegistry::bridges(), CustomData::bridges())
    }

    /// Check configuration and registry agree, accumulating every error
    pub fn validation(&self) -> DashboardValidation<()> {
        combine_validations(vec![
            validate_config(&self.config),
            validate_registry(&self.config, &self.components),
        ])
    }

    /// Fail-fast wrapper over [`Customization::validation`]
    pub fn validate(&self) -> Result<()> {
        run_validation(self.validation())
    }

    /// Serializable view of the export surface
    pub fn export(&self) -> ExportedCustomization<'_> {
        ExportedCustomization {
            config: &self.config,
            components: self.components.ids().collect(),
            data: &self.data,
        }
    }
}

/// Export surface with components reduced to their tab ids
#[derive(Debug, Serialize)]
pub struct ExportedCustomization<'a> {
    pub config: &'a AppConfig,
    pub components: Vec<&'a str>,
    pub data: &'a CustomData,
}

/// Every tab needs a component, and every component's charts must exist.
pub fn validate_registry(config: &AppConfig, registry: &ComponentRegistry) -> DashboardValidation<()> {
    let mut errors = Vec::new();

    for tab in &config.dashboard.tabs {
        match registry.get(&tab.id) {
            None => errors.push(DashboardError::MissingComponent {
                tab: tab.id.clone(),
            }),
            Some(component) => {
                for chart in component.required_charts() {
                    if config.chart(chart.section, chart.name).is_none() {
                        errors.push(DashboardError::MissingChart {
                            component: tab.id.clone(),
                            chart: format!("{}.{}", chart.section, chart.name),
                        });
                    }
                }
            }
        }
    }

    from_errors(errors)
}
