//! Application state for the dashboard shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use super::layout::render_adaptive;
use crate::components::RenderContext;
use crate::config::{AppConfig, TabConfig};
use crate::customization::Customization;
use crate::errors::{DashboardError, Result};

/// What the body of the shell is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The component registered for the active tab
    Tab,
    /// Shared dashboard charts, clients and feature flags
    Overview,
    /// Keyboard shortcuts overlay
    Help,
}

/// Main application state
pub struct DashboardApp {
    customization: Customization,
    active_tab: usize,
    view_mode: ViewMode,
    should_quit: bool,
}

impl DashboardApp {
    /// Create new application state showing the first tab
    pub fn new(customization: Customization) -> Self {
        Self {
            customization,
            active_tab: 0,
            view_mode: ViewMode::Tab,
            should_quit: false,
        }
    }

    /// Start on the tab with the given id
    pub fn with_initial_tab(mut self, tab_id: &str) -> Result<Self> {
        let index = self.config().tab_index(tab_id).ok_or_else(|| {
            DashboardError::validation(format!(
                "unknown tab '{}'; configured tabs: {}",
                tab_id,
                self.tab_ids().join(", ")
            ))
        })?;
        self.active_tab = index;
        Ok(self)
    }

    pub fn config(&self) -> &AppConfig {
        &self.customization.config
    }

    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    fn tab_ids(&self) -> Vec<&str> {
        self.config()
            .dashboard
            .tabs
            .iter()
            .map(|t| t.id.as_str())
            .collect()
    }

    /// Index of the active tab in navigation order
    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn active_tab_config(&self) -> Option<&TabConfig> {
        self.config().dashboard.tabs.get(self.active_tab)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Select a tab by index, ignoring out-of-range requests
    pub fn select_tab(&mut self, index: usize) {
        if index < self.config().dashboard.tabs.len() {
            self.active_tab = index;
            self.view_mode = ViewMode::Tab;
        }
    }

    pub fn next_tab(&mut self) {
        let count = self.config().dashboard.tabs.len();
        if count > 0 {
            self.select_tab((self.active_tab + 1) % count);
        }
    }

    pub fn prev_tab(&mut self) {
        let count = self.config().dashboard.tabs.len();
        if count > 0 {
            self.select_tab((self.active_tab + count - 1) % count);
        }
    }

    fn toggle(&mut self, mode: ViewMode) {
        self.view_mode = if self.view_mode == mode {
            ViewMode::Tab
        } else {
            mode
        };
    }

    /// Handle keyboard input. Returns true when the view should be redrawn.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc if self.view_mode == ViewMode::Tab => self.should_quit = true,
            KeyCode::Esc => self.view_mode = ViewMode::Tab,
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.next_tab(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.prev_tab(),
            KeyCode::Char('o') => self.toggle(ViewMode::Overview),
            KeyCode::Char('?') => self.toggle(ViewMode::Help),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_tab(index);
            }
            _ => return self.forward_to_component(key),
        }
        true
    }

    /// Pass a key to the active tab's component
    fn forward_to_component(&mut self, key: KeyEvent) -> bool {
        if self.view_mode != ViewMode::Tab {
            return false;
        }
        let Some(tab_id) = self.active_tab_config().map(|t| t.id.clone()) else {
            return false;
        };
        self.customization
            .components
            .get_mut(&tab_id)
            .map(|component| component.handle_key(key))
            .unwrap_or(false)
    }

    /// Render the current view
    pub fn render(&mut self, frame: &mut Frame) {
        render_adaptive(frame, self);
    }

    /// Render the active tab's component into `area`.
    ///
    /// Returns false when no component is registered for the tab.
    pub(crate) fn render_active_component(
        &mut self,
        frame: &mut Frame,
        area: ratatui::layout::Rect,
    ) -> bool {
        let Customization {
            config,
            components,
            ..
        } = &mut self.customization;

        let Some(tab) = config.dashboard.tabs.get(self.active_tab) else {
            return false;
        };

        match components.get_mut(&tab.id) {
            Some(component) => {
                let ctx = RenderContext::new(config);
                component.render(frame, area, &ctx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> DashboardApp {
        DashboardApp::new(Customization::bridges())
    }

    #[test]
    fn test_starts_on_first_tab() {
        let app = app();
        assert_eq!(app.active_tab(), 0);
        assert_eq!(app.active_tab_config().unwrap().id, "dealPipeline");
        assert_eq!(app.view_mode(), ViewMode::Tab);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.active_tab(), 2);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.active_tab(), 0);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_tab(), 1);
    }

    #[test]
    fn test_number_keys_jump_to_tab() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.active_tab_config().unwrap().id, "impactMetrics");

        // Out of range is ignored
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.active_tab(), 2);
    }

    #[test]
    fn test_overview_toggle_and_escape() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        assert_eq!(app.view_mode(), ViewMode::Overview);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.view_mode(), ViewMode::Tab);
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_arrow_keys_reach_active_component() {
        let mut app = app();
        assert!(app.handle_key(key(KeyCode::Down)));

        app.handle_key(key(KeyCode::Char('o')));
        assert!(!app.handle_key(key(KeyCode::Down)));
    }

    #[test]
    fn test_initial_tab_must_exist() {
        let app = app().with_initial_tab("impactMetrics").unwrap();
        assert_eq!(app.active_tab(), 2);

        let err = DashboardApp::new(Customization::bridges())
            .with_initial_tab("reports")
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown tab 'reports'"));
    }
}
