//! Subscriber setup for `tracing` and the `log` facade.
//!
//! Output goes to stderr. While the TUI owns the terminal, log lines are
//! dropped so they do not tear the alternate screen.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::EnvFilter;

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the TUI currently owns the terminal.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Default filter directive for a `-v` count.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbosity`.
///
/// Records emitted through the `log` macros are forwarded to the subscriber.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(GatedStderr::make)
        .try_init();

    if result.is_err() {
        log::debug!("Tracing subscriber already installed");
    }
}

/// Stderr writer that swallows output while the TUI is active.
pub enum GatedStderr {
    Stderr(io::Stderr),
    Muted,
}

impl GatedStderr {
    pub fn make() -> Self {
        if is_tui_active() {
            GatedStderr::Muted
        } else {
            GatedStderr::Stderr(io::stderr())
        }
    }
}

impl Write for GatedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            GatedStderr::Stderr(stderr) => stderr.write(buf),
            GatedStderr::Muted => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            GatedStderr::Stderr(stderr) => stderr.flush(),
            GatedStderr::Muted => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(0), "warn");
        assert_eq!(filter_directive(1), "info");
        assert_eq!(filter_directive(2), "debug");
        assert_eq!(filter_directive(9), "trace");
    }

    #[test]
    fn test_muted_writer_accepts_everything() {
        let mut writer = GatedStderr::Muted;
        assert_eq!(writer.write(b"hidden").unwrap(), 6);
        assert!(writer.flush().is_ok());
    }

    #[test]
    fn test_tui_flag_selects_writer() {
        set_tui_active(true);
        assert!(matches!(GatedStderr::make(), GatedStderr::Muted));
        set_tui_active(false);
        assert!(matches!(GatedStderr::make(), GatedStderr::Stderr(_)));
    }
}
