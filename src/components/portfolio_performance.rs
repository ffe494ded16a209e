//! Portfolio performance: revenue growth and profit margin side by side.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::{ChartRef, DashboardComponent, RenderContext};
use crate::config::{ChartConfig, ChartKind, HexColor};
use crate::tui::charts::{render_chart, render_missing};
use crate::tui::theme::Theme;

pub const REVENUE_GROWTH: &str = "revenueGrowth";
pub const PROFIT_MARGIN: &str = "profitMargin";

const REQUIRED: [ChartRef; 2] = [
    ChartRef::analytics(REVENUE_GROWTH),
    ChartRef::analytics(PROFIT_MARGIN),
];

/// Two analytics series drawn as a line chart and a bar chart
#[derive(Debug, Default)]
pub struct PortfolioPerformanceComponent;

impl PortfolioPerformanceComponent {
    pub fn new() -> Self {
        Self
    }
}

/// How one analytics series is drawn
struct SeriesStyle {
    title: &'static str,
    kind: ChartKind,
    stroke: HexColor,
}

/// Draw one series in the brand color, or a notice if it is absent
fn render_series(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    chart: Option<&ChartConfig>,
    style: SeriesStyle,
    theme: &Theme,
) {
    let title = style.title;
    match chart {
        Some(chart) => {
            let mut chart = chart.clone();
            chart.kind = style.kind;
            chart.colors = vec![style.stroke; chart.data_keys.len()];
            render_chart(frame, area, title, &chart, theme);
        }
        None => {
            tracing::debug!(chart = name, "analytics chart missing; rendering notice");
            render_missing(frame, area, title, name, theme);
        }
    }
}

impl DashboardComponent for PortfolioPerformanceComponent {
    fn id(&self) -> &'static str {
        "portfolioPerformance"
    }

    fn title(&self) -> &'static str {
        "Portfolio Performance"
    }

    fn required_charts(&self) -> &'static [ChartRef] {
        &REQUIRED
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let outer = ctx.theme.panel(self.title());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let analytics = &ctx.config.analytics.charts;

        render_series(
            frame,
            halves[0],
            REVENUE_GROWTH,
            analytics.get(REVENUE_GROWTH),
            SeriesStyle {
                title: "Revenue Growth",
                kind: ChartKind::Line,
                stroke: ctx.config.primary_color,
            },
            &ctx.theme,
        );
        render_series(
            frame,
            halves[1],
            PROFIT_MARGIN,
            analytics.get(PROFIT_MARGIN),
            SeriesStyle {
                title: "Profit Margin",
                kind: ChartKind::Bar,
                stroke: ctx.config.secondary_color,
            },
            &ctx.theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartSection;

    #[test]
    fn test_declares_both_analytics_series() {
        let component = PortfolioPerformanceComponent::new();
        let names: Vec<_> = component.required_charts().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["revenueGrowth", "profitMargin"]);
        assert!(component
            .required_charts()
            .iter()
            .all(|c| c.section == ChartSection::Analytics));
    }
}
