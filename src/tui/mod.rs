//! Terminal host shell for a dashboard customization.
//!
//! The shell owns chrome (header, tab bar, overview, help, footer) and
//! delegates each tab's body to the component registered for it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use impact_dashboard::tui::{DashboardApp, DashboardShell};
//! use impact_dashboard::Customization;
//!
//! let app = DashboardApp::new(Customization::bridges());
//! let mut shell = DashboardShell::new(app)?;
//! shell.run()?;
//! // Terminal is restored on drop
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod app;
pub mod charts;
pub mod layout;
pub mod renderer;
pub mod snapshot;
pub mod theme;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, backend::TestBackend, Terminal};

pub use app::{DashboardApp, ViewMode};

use crate::observability::set_tui_active;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive shell bound to the real terminal
pub struct DashboardShell {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: DashboardApp,
}

impl DashboardShell {
    /// Enter raw mode and the alternate screen.
    ///
    /// If setup fails partway, the terminal is restored before returning.
    pub fn new(app: DashboardApp) -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = restore_on_error(enter_screen(), restore_terminal)?;
        set_tui_active(true);

        Ok(Self { terminal, app })
    }

    /// Draw and dispatch key presses until the app asks to quit
    pub fn run(&mut self) -> io::Result<()> {
        self.render()?;

        while !self.app.should_quit() {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.app.handle_key(key) {
                        self.render()?;
                    }
                }
                Event::Resize(width, height) => {
                    tracing::trace!(width, height, "terminal resized");
                    self.render()?;
                }
                _ => {}
            }
        }

        tracing::info!("dashboard closed");
        Ok(())
    }

    pub fn render(&mut self) -> io::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    pub fn app(&self) -> &DashboardApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut DashboardApp {
        &mut self.app
    }

    /// Leave the alternate screen and restore the cursor
    pub fn cleanup(&mut self) -> io::Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `restore` when `result` is an error, then pass the result through
fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

impl Drop for DashboardShell {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Draw one frame off-screen and return it as plain text
pub fn render_to_string(app: &mut DashboardApp, width: u16, height: u16) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))
        .map_err(|e| io::Error::other(e.to_string()))?;
    terminal
        .draw(|frame| app.render(frame))
        .map_err(|e| io::Error::other(e.to_string()))?;
    Ok(snapshot::buffer_to_string(terminal.backend().buffer()))
}
