//! Core rendering logic for the dashboard shell.

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs},
    Frame,
};

use super::app::{DashboardApp, ViewMode};
use super::charts::render_chart;
use super::layout::{calculate_layout, LayoutMode};
use super::theme::Theme;
use crate::config::AppConfig;

/// Render the full shell interface
pub fn render_ui(frame: &mut Frame, app: &mut DashboardApp, mode: LayoutMode) {
    let theme = Theme::from_config(app.config());
    let chunks = calculate_layout(frame.area());

    render_header(frame, app.config(), &theme, chunks[0]);
    render_tabs(frame, app, &theme, mode, chunks[1]);

    match app.view_mode() {
        ViewMode::Tab => render_active_view(frame, app, &theme, chunks[2]),
        ViewMode::Overview => render_overview(frame, app.config(), &theme, chunks[2]),
        ViewMode::Help => {
            render_active_view(frame, app, &theme, chunks[2]);
            render_help_overlay(frame, &theme);
        }
    }

    render_footer(frame, &theme, chunks[3]);
}

/// Render header section (title + user)
fn render_header(frame: &mut Frame, config: &AppConfig, theme: &Theme, area: Rect) {
    let title = Span::styled(format!(" {}", config.title), theme.title_style());
    let user = Span::styled(
        format!("{} · {} ", config.company_name, config.user_name),
        theme.muted_style(),
    );

    let used = title.width() + user.width();
    let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

    let header = Paragraph::new(Line::from(vec![
        title,
        Span::raw(" ".repeat(padding)),
        user,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );

    frame.render_widget(header, area);
}

/// Tab titles for the current layout mode
pub fn tab_titles(config: &AppConfig, mode: LayoutMode) -> Vec<String> {
    config
        .dashboard
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            if mode.shows_tab_labels() {
                format!("{} {}", tab.icon.glyph(), tab.label)
            } else {
                format!("{} {}", index + 1, tab.icon.glyph())
            }
        })
        .collect()
}

/// Render the tab bar in configured order
fn render_tabs(frame: &mut Frame, app: &DashboardApp, theme: &Theme, mode: LayoutMode, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());

    if mode.shows_descriptions() {
        if let Some(tab) = app.active_tab_config() {
            block = block.title(Span::styled(
                format!(" {} ", tab.description),
                theme.muted_style(),
            ));
        }
    }

    let selected = match app.view_mode() {
        ViewMode::Overview => None,
        _ => Some(app.active_tab()),
    };

    let tabs = Tabs::new(tab_titles(app.config(), mode))
        .block(block)
        .style(theme.muted_style())
        .highlight_style(theme.active_tab_style())
        .select(selected)
        .divider(" │ ");

    frame.render_widget(tabs, area);
}

/// Render the component registered for the active tab
fn render_active_view(frame: &mut Frame, app: &mut DashboardApp, theme: &Theme, area: Rect) {
    if app.render_active_component(frame, area) {
        return;
    }

    let tab_id = app
        .active_tab_config()
        .map(|t| t.id.clone())
        .unwrap_or_default();
    tracing::debug!(tab = %tab_id, "no component registered");

    let notice = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No component registered for tab '{}'", tab_id),
            theme.warning_style(),
        )),
    ])
    .centered()
    .block(theme.panel("Unavailable"));

    frame.render_widget(notice, area);
}

/// Render shared dashboard charts alongside clients and feature flags
fn render_overview(frame: &mut Frame, config: &AppConfig, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(38)])
        .split(area);

    let charts: Vec<_> = config.dashboard.charts.iter().collect();
    if charts.is_empty() {
        frame.render_widget(
            Paragraph::new("No shared charts configured").block(theme.panel("Overview")),
            columns[0],
        );
    } else {
        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, charts.len() as u32); charts.len()])
            .split(columns[0]);

        for ((name, chart), slot) in charts.into_iter().zip(slots.iter()) {
            render_chart(frame, *slot, &humanize_key(name), chart, theme);
        }
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(list_height(config.clients.len())),
            Constraint::Min(3),
        ])
        .split(columns[1]);

    let clients: Vec<ListItem> = config
        .clients
        .iter()
        .map(|client| {
            ListItem::new(Line::from(vec![
                Span::styled(client.name.clone(), theme.header_style()),
                Span::styled(format!("  {}", client.industry), theme.muted_style()),
            ]))
        })
        .collect();
    frame.render_widget(List::new(clients).block(theme.panel("Clients")), side[0]);

    let features: Vec<ListItem> = config
        .features
        .iter()
        .map(|(name, enabled)| {
            let (mark, style) = if *enabled {
                ("✓", theme.title_style())
            } else {
                ("·", theme.muted_style())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::raw(humanize_key(name)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(features).block(theme.panel("Features")), side[1]);
}

/// Height of a bordered list holding `items` rows
fn list_height(items: usize) -> u16 {
    u16::try_from(items).unwrap_or(u16::MAX).saturating_add(2)
}

/// Render footer key hints
fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect) {
    let hints = [
        ("[←→]", " Tabs  "),
        ("[1-9]", " Jump  "),
        ("[↑↓]", " Rows  "),
        ("[o]", " Overview  "),
        ("[?]", " Help  "),
        ("[q]", " Quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, theme.key_style()),
                Span::styled(*label, theme.muted_style()),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

/// Render a centered help overlay
fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let popup_area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, popup_area);

    let entries = [
        ("←/→ Tab", "Switch tab"),
        ("1-9", "Jump to tab"),
        ("↑/↓", "Move within the active view"),
        ("o", "Toggle overview"),
        ("?", "Toggle this help"),
        ("Esc", "Close overlay / quit"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from(Span::styled("Keyboard", theme.header_style())), Line::raw("")];
    lines.extend(entries.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("  {:<9}", key), theme.key_style()),
            Span::raw(*action),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(theme.panel("Help")), popup_area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Turn a camelCase key into words: `dealsByStage` -> `Deals By Stage`
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}
