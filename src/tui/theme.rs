//! Color themes and styling for dashboard views.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use crate::config::{AppConfig, HexColor};

/// Convert a configured hex color to a terminal color
pub fn to_color(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Tenant-branded color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Brand primary color (active tab, headings, line series)
    pub primary: Color,
    /// Brand secondary color (highlights, bar series)
    pub secondary: Color,
    /// Muted color for borders and secondary text
    pub muted: Color,
    /// Text color
    pub text: Color,
}

impl Theme {
    /// Create a theme from the tenant branding
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            primary: to_color(config.primary_color),
            secondary: to_color(config.secondary_color),
            ..Self::default_theme()
        }
    }

    /// Neutral theme used before a configuration is known
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Style for view titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the selected tab
    pub fn active_tab_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Titled, bordered container views draw inside
    pub fn panel(&self, title: &str) -> Block<'static> {
        Block::default()
            .title(format!(" {} ", title))
            .title_style(self.title_style())
            .borders(Borders::ALL)
            .border_style(self.border_style())
    }

    /// Style for table headers
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Style for the highlighted table row
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::REVERSED)
    }

    /// Style for large metric values
    pub fn metric_value_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for descriptions and hints
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for key hints in the footer
    pub fn key_style(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    /// Style for error notices
    pub fn warning_style(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets::bridges_config;

    #[test]
    fn test_theme_from_branding() {
        let theme = Theme::from_config(&bridges_config());
        assert_eq!(theme.primary, Color::Rgb(0x4F, 0x46, 0xE5));
        assert_eq!(theme.secondary, Color::Rgb(0x81, 0x8C, 0xF8));
        assert_eq!(theme.muted, Color::DarkGray);
    }

    #[test]
    fn test_style_consistency() {
        let theme = Theme::default_theme();
        assert_ne!(theme.title_style().fg, theme.border_style().fg);
    }
}
