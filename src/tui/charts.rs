//! Chart widgets driven by chart descriptors.
//!
//! Line charts map to ratatui's `Chart`, bar charts to `BarChart`, and pie
//! charts are drawn as proportional slice bars since a terminal has no
//! good circle primitive.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::theme::{to_color, Theme};
use crate::config::{ChartConfig, ChartKind, ChartValue};

/// Render a chart descriptor into `area` under a titled border
pub fn render_chart(frame: &mut Frame, area: Rect, title: &str, chart: &ChartConfig, theme: &Theme) {
    let block = theme.panel(title);

    match chart.kind {
        ChartKind::Line => render_line(frame, area, block, chart, theme),
        ChartKind::Bar => render_bar(frame, area, block, chart, theme),
        ChartKind::Pie => render_pie(frame, area, block, chart, theme),
    }
}

/// Render a placeholder when a required chart is absent
pub fn render_missing(frame: &mut Frame, area: Rect, title: &str, chart_name: &str, theme: &Theme) {
    let block = theme.panel(title);

    let notice = Paragraph::new(Line::from(Span::styled(
        format!("chart '{}' is not configured", chart_name),
        theme.warning_style(),
    )))
    .block(block);

    frame.render_widget(notice, area);
}

fn series_color(chart: &ChartConfig, index: usize, theme: &Theme) -> Color {
    chart.series_color(index).map(to_color).unwrap_or(theme.text)
}

/// Upper y bound with some headroom above the largest value
fn y_upper_bound(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        (max * 1.2).ceil()
    }
}

fn render_line(frame: &mut Frame, area: Rect, block: Block, chart: &ChartConfig, theme: &Theme) {
    let categories = chart.categories();

    let series: Vec<(String, Color, Vec<(f64, f64)>)> = chart
        .data_keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let points = chart
                .series(key)
                .into_iter()
                .enumerate()
                .filter_map(|(x, value)| value.map(|y| (x as f64, y)))
                .collect();
            (key.clone(), series_color(chart, index, theme), points)
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(name, color, points)| {
            Dataset::default()
                .name(name.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let x_max = categories.len().saturating_sub(1).max(1) as f64;
    let y_max = y_upper_bound(chart.max_value());

    let x_labels: Vec<Span> = categories
        .iter()
        .map(|label| Span::styled(label.clone(), theme.muted_style()))
        .collect();
    let y_labels: Vec<Span> = [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|v| Span::styled(ChartValue::Number(v.round()).to_string(), theme.muted_style()))
        .collect();

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme.muted_style())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.muted_style())
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

fn render_bar(frame: &mut Frame, area: Rect, block: Block, chart: &ChartConfig, theme: &Theme) {
    let categories = chart.categories();
    let bars_per_group = chart.data_keys.len().max(1);
    let bar_width = bar_width_for(area.width, categories.len(), bars_per_group);

    let mut widget = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .group_gap(2)
        .value_style(Style::default().fg(theme.text).bg(theme.muted));

    for (row, label) in categories.iter().enumerate() {
        let bars: Vec<Bar> = chart
            .data_keys
            .iter()
            .enumerate()
            .map(|(index, key)| {
                let value = chart.data[row]
                    .get(key)
                    .and_then(ChartValue::as_f64)
                    .unwrap_or(0.0);
                Bar::default()
                    .value(value.max(0.0).round() as u64)
                    .style(Style::default().fg(series_color(chart, index, theme)))
            })
            .collect();

        let group = BarGroup::default()
            .label(Line::from(label.clone()))
            .bars(&bars);
        widget = widget.data(group);
    }

    frame.render_widget(widget, area);
}

/// Width of a single bar so every group fits inside `width`
fn bar_width_for(width: u16, groups: usize, bars_per_group: usize) -> u16 {
    if groups == 0 {
        return 1;
    }
    let inner = width.saturating_sub(2) as usize;
    let gaps = groups.saturating_sub(1) * 2 + groups * bars_per_group.saturating_sub(1);
    let available = inner.saturating_sub(gaps);
    (available / (groups * bars_per_group)).clamp(1, 9) as u16
}

fn render_pie(frame: &mut Frame, area: Rect, block: Block, chart: &ChartConfig, theme: &Theme) {
    let key = chart.data_keys.first().map(String::as_str).unwrap_or_default();
    let labels = chart.categories();
    let values: Vec<f64> = chart
        .series(key)
        .into_iter()
        .map(|v| v.unwrap_or(0.0).max(0.0))
        .collect();

    let inner_width = block.inner(area).width as usize;
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).min(inner_width / 2);
    let bar_room = inner_width.saturating_sub(label_width + 8);

    let lines: Vec<Line> = slice_shares(&values)
        .into_iter()
        .zip(labels.iter())
        .enumerate()
        .map(|(index, (share, label))| {
            let color = chart.slice_color(index).map(to_color).unwrap_or(theme.text);
            let filled = (share * bar_room as f64).round() as usize;
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!(
                    "{:<width$} ",
                    crate::formatting::truncate(label, label_width),
                    width = label_width
                )),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(format!(" {:>3.0}%", share * 100.0), theme.muted_style()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Fraction of the total each slice represents
pub fn slice_shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total).collect()
}
