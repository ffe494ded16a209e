// Shared helpers for dashboard integration tests
#![allow(dead_code)]

use impact_dashboard::components::{DashboardComponent, RenderContext};
use impact_dashboard::config::presets::bridges_config;
use impact_dashboard::config::AppConfig;
use impact_dashboard::tui::snapshot::buffer_to_string;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Draw a single component into an off-screen terminal and return the text
pub fn render_component(component: &mut dyn DashboardComponent, width: u16, height: u16) -> String {
    render_component_with(component, &bridges_config(), width, height)
}

pub fn render_component_with(
    component: &mut dyn DashboardComponent,
    config: &AppConfig,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let ctx = RenderContext::new(config);
    terminal
        .draw(|frame| component.render(frame, frame.area(), &ctx))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

/// Lines of rendered text containing `needle`
pub fn lines_containing<'a>(text: &'a str, needle: &str) -> Vec<&'a str> {
    text.lines().filter(|line| line.contains(needle)).collect()
}

/// The binary under test, isolated from the caller's environment
#[allow(deprecated)]
pub fn dashboard_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("impact-dashboard").unwrap();
    cmd.env_remove("IMPACT_DASHBOARD_CONFIG").env_remove("RUST_LOG");
    cmd
}
