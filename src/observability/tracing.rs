//! Tracing subscriber setup.
//!
//! Log output goes to stderr by default. While the terminal shell owns the
//! screen, stderr output is dropped unless a log file was requested, so log
//! lines never tear the alternate screen.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::errors::Result;

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the terminal shell currently owns the screen
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Default filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn stderr_unless_tui() -> Box<dyn Write> {
    if is_tui_active() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbosity`. Records emitted through the `log`
/// crate are forwarded into the same subscriber. Calling this twice is
/// harmless: the second call leaves the first subscriber in place.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(stderr_unless_tui), true),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
    {
        tracing::debug!(error = %err, "logging already initialized");
    }

    Ok(())
}
