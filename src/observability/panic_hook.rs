//! Panic hook that restores the terminal before reporting.
//!
//! A panic while the browser is open would otherwise leave the terminal in
//! raw mode on the alternate screen, hiding the message.

use super::tracing::{is_tui_active, set_tui_active};
use std::io::Write;
use std::panic::PanicHookInfo;
use std::sync::Mutex;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "────────────────────────────────────────────────────────────";

static CATALOG_LABEL: Mutex<Option<String>> = Mutex::new(None);

/// Remember which catalog is loaded so a crash report can name it.
pub fn set_catalog_label(label: impl Into<String>) {
    if let Ok(mut slot) = CATALOG_LABEL.lock() {
        *slot = Some(label.into());
    }
}

fn catalog_label() -> Option<String> {
    CATALOG_LABEL.lock().ok().and_then(|slot| slot.clone())
}

/// Install the crash reporter. Call before entering the TUI.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    exit_tui_mode();

    eprintln!();
    eprintln!("{RULE}");
    eprintln!("omni-deals {VERSION} crashed ({})", std::env::consts::OS);
    eprintln!("{RULE}");
    eprintln!("  panic:    {}", extract_panic_message(info));

    if let Some(location) = info.location() {
        eprintln!(
            "  location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }

    if let Some(metadata) = Span::current().metadata() {
        eprintln!("  span:     {}", metadata.name());
    }

    if let Some(label) = catalog_label() {
        eprintln!("  catalog:  {}", truncate(&label, 60));
    }

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for a stack trace");
    }
    eprintln!("{RULE}");
}

fn exit_tui_mode() {
    let active = is_tui_active();
    set_tui_active(false);
    restore_terminal(active, &mut std::io::stdout());
}

/// Leave raw mode and the alternate screen, but only if the browser owned
/// the terminal. Returns whether anything was written to `out`.
fn restore_terminal(tui_active: bool, out: &mut impl Write) -> bool {
    if !tui_active {
        return false;
    }

    // Already panicking; nothing useful to do with these errors.
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen);
    true
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
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
        format!("{kept}...")
    }
}
