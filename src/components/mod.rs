//! Tenant view components and the registry that maps tab ids to them.
//!
//! Each component owns its local state (seeded with literal values) and
//! draws itself into the area the host shell hands it. The shared
//! configuration is passed in through [`RenderContext`] on every render.
//!
//! # Example
//!
//! ```rust
//! use impact_dashboard::components::ComponentRegistry;
//!
//! let registry = ComponentRegistry::bridges();
//! assert!(registry.contains("dealPipeline"));
//! assert_eq!(registry.len(), 3);
//! ```

pub mod deal_pipeline;
pub mod impact_metrics;
pub mod portfolio_performance;
mod registry;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::config::{AppConfig, ChartSection};
use crate::tui::theme::Theme;

pub use deal_pipeline::DealPipelineComponent;
pub use impact_metrics::ImpactMetricsComponent;
pub use portfolio_performance::PortfolioPerformanceComponent;
pub use registry::ComponentRegistry;

/// Shared inputs available to every component render
pub struct RenderContext<'a> {
    pub config: &'a AppConfig,
    pub theme: Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            theme: Theme::from_config(config),
        }
    }
}

/// A chart a component reads out of the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRef {
    pub section: ChartSection,
    pub name: &'static str,
}

impl ChartRef {
    pub const fn analytics(name: &'static str) -> Self {
        Self {
            section: ChartSection::Analytics,
            name,
        }
    }
}

/// A view the host shell can mount under a tab
pub trait DashboardComponent {
    /// Tab identifier this component is registered under
    fn id(&self) -> &'static str;

    /// Heading drawn above the view
    fn title(&self) -> &'static str;

    /// Charts that must exist in the configuration for this view to render
    fn required_charts(&self) -> &'static [ChartRef] {
        &[]
    }

    /// React to a key forwarded by the shell. Returns true when local
    /// state changed and the view should be redrawn.
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }

    /// Draw the view into `area`
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>);
}
