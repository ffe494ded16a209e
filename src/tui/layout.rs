//! Responsive layout management for different terminal sizes.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Bridges Fund Management - Impact Investing Dashboard  Emma M │
//! ├──────────────────────────────────────────────────────────────┤
//! │ ▣ Deal Pipeline │ ▥ Portfolio Performance │ ▤ Impact Metrics │
//! ├──────────────────────────────────────────────────────────────┤
//! │  active component / overview                                 │
//! └──────────────────────────────────────────────────────────────┘
//!  [←→] Tabs  [1-9] Jump  [↑↓] Rows  [o] Overview  [?] Help  [q] Quit
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::app::DashboardApp;
use super::renderer::render_ui;

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Icons, labels and tab descriptions (>=120 cols)
    Full,
    /// Icons and labels (70-119 cols)
    Standard,
    /// Icons only in the tab bar (<70 cols)
    Compact,
}

impl LayoutMode {
    /// Determine layout mode from terminal width
    pub fn from_terminal_width(width: u16) -> Self {
        match width {
            0..=69 => Self::Compact,
            70..=119 => Self::Standard,
            _ => Self::Full,
        }
    }

    /// Check if tab labels fit in the tab bar
    pub fn shows_tab_labels(&self) -> bool {
        matches!(self, Self::Full | Self::Standard)
    }

    /// Check if the active tab's description is shown
    pub fn shows_descriptions(&self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Calculate main layout: header, tab bar, body, footer
pub fn calculate_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (title + user)
            Constraint::Length(3), // Tab bar
            Constraint::Min(8),    // Active view
            Constraint::Length(1), // Footer (key hints)
        ])
        .split(area)
        .to_vec()
}

/// Render the shell with adaptive layout
pub fn render_adaptive(frame: &mut Frame, app: &mut DashboardApp) {
    let mode = LayoutMode::from_terminal_width(frame.area().width);
    render_ui(frame, app, mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_selection() {
        assert_eq!(LayoutMode::from_terminal_width(50), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_terminal_width(90), LayoutMode::Standard);
        assert_eq!(LayoutMode::from_terminal_width(150), LayoutMode::Full);
    }

    #[test]
    fn test_label_and_description_visibility() {
        assert!(!LayoutMode::Compact.shows_tab_labels());
        assert!(LayoutMode::Standard.shows_tab_labels());
        assert!(!LayoutMode::Standard.shows_descriptions());
        assert!(LayoutMode::Full.shows_descriptions());
    }

    #[test]
    fn test_layout_constraints() {
        let area = Rect::new(0, 0, 100, 30);
        let chunks = calculate_layout(area);

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].height, 3);
        assert_eq!(chunks[1].height, 3);
        assert_eq!(chunks[3].height, 1);
        assert_eq!(chunks[2].height, 23);
    }
}
