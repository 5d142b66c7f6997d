//! Interactive catalog browser.
//!
//! A keyboard-driven view over the comparison table: live title search,
//! page navigation, and a best-price highlight per row.
//!
//! ```rust,ignore
//! use omni_deals::tui::CatalogExplorer;
//!
//! let mut explorer = CatalogExplorer::new(app)?;
//! explorer.run()?;
//! ```

pub mod actions;
pub mod app;
pub mod theme;
pub mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::observability::set_tui_active;
pub use app::BrowserApp;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal owner for the browser. Restores the terminal on drop.
pub struct CatalogExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: BrowserApp,
}

impl CatalogExplorer {
    /// Enter raw mode and the alternate screen.
    pub fn new(app: BrowserApp) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        set_tui_active(true);

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    if self.app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    /// Restore the terminal.
    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for CatalogExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
