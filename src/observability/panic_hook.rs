//! Crash reports for panics.
//!
//! The hook leaves the alternate screen and raw mode before printing, so the
//! report lands on a usable terminal even when the shell was mid-frame.

use std::panic::PanicHookInfo;

use super::tracing::{is_tui_active, set_tui_active};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 78;

/// Install the crash-report panic hook. Call once, early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let was_tui = is_tui_active();
    exit_tui_mode();

    eprintln!();
    for line in crash_report_lines(info, was_tui) {
        eprintln!("{}", line);
    }

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    }
}

fn exit_tui_mode() {
    set_tui_active(false);

    // Already panicking; nothing useful to do with a failure here
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stderr(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

fn crash_report_lines(info: &PanicHookInfo<'_>, was_tui: bool) -> Vec<String> {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown".to_string());

    let mut lines = vec![
        rule('╔', '╗'),
        boxed("IMPACT DASHBOARD CRASH REPORT"),
        rule('╠', '╣'),
        boxed(&format!("Version: {}", VERSION)),
        boxed(&format!("Platform: {}", std::env::consts::OS)),
        boxed(&format!("Time: {}", timestamp)),
        rule('╠', '╣'),
        boxed(&format!("PANIC: {}", panic_message(info))),
        boxed(&format!("Location: {}", location)),
    ];
    if was_tui {
        lines.push(boxed("Terminal shell was active; screen has been restored"));
    }
    if std::env::var("RUST_BACKTRACE").is_err() {
        lines.push(boxed("Run with RUST_BACKTRACE=1 for stack trace"));
    }
    lines.push(rule('╚', '╝'));
    lines
}

fn rule(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(WIDTH), right)
}

fn boxed(text: &str) -> String {
    let inner = WIDTH - 2;
    format!("║  {:<inner$}║", truncate(text, inner), inner = inner)
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_long_text() {
        let result = truncate("this is a long string that needs truncation", 20);
        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("▣▣▣▣▣", 5), "▣▣▣▣▣");
        assert_eq!(truncate("▣▣▣▣▣▣", 5), "▣▣...");
    }

    #[test]
    fn test_boxed_lines_share_width() {
        assert_eq!(boxed("x").chars().count(), rule('╔', '╗').chars().count());
        assert_eq!(
            boxed(&"y".repeat(200)).chars().count(),
            rule('╔', '╗').chars().count()
        );
    }
}
