//! Impact metric cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde::{Deserialize, Serialize};

use super::{DashboardComponent, RenderContext};

/// A social or environmental outcome with its display value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub id: u32,
    pub metric: String,
    pub value: String,
}

/// Seed data shown on the cards
pub fn seed_metrics() -> Vec<ImpactMetric> {
    [
        (1, "CO2 Emissions Reduced", "500,000 tons"),
        (2, "Jobs Created", "1,200"),
        (3, "Waste Diverted from Landfills", "10,000 tons"),
        (4, "Clean Energy Generated", "100 MW"),
    ]
    .into_iter()
    .map(|(id, metric, value)| ImpactMetric {
        id,
        metric: metric.to_string(),
        value: value.to_string(),
    })
    .collect()
}

const COLUMNS: usize = 2;

/// Grid of label/value cards
pub struct ImpactMetricsComponent {
    metrics: Vec<ImpactMetric>,
}

impl ImpactMetricsComponent {
    pub fn new() -> Self {
        Self {
            metrics: seed_metrics(),
        }
    }

    pub fn metrics(&self) -> &[ImpactMetric] {
        &self.metrics
    }

    /// Card areas laid out row by row, two per row
    fn card_areas(&self, area: Rect) -> Vec<Rect> {
        let row_count = self.metrics.len().div_ceil(COLUMNS).max(1);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
            .split(area);

        rows.iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                    .split(*row)
                    .to_vec()
            })
            .take(self.metrics.len())
            .collect()
    }
}

impl Default for ImpactMetricsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent for ImpactMetricsComponent {
    fn id(&self) -> &'static str {
        "impactMetrics"
    }

    fn title(&self) -> &'static str {
        "Impact Metrics"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let theme = &ctx.theme;
        let outer = theme.panel(self.title());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        for (metric, card) in self.metrics.iter().zip(self.card_areas(inner)) {
            let lines = vec![
                Line::from(Span::styled(metric.metric.clone(), theme.header_style())),
                Line::from(""),
                Line::from(Span::styled(metric.value.clone(), theme.metric_value_style())),
            ];

            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border_style()),
                );

            frame.render_widget(widget, card);
        }
    }
}
