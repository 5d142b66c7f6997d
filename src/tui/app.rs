//! Application state for the catalog browser.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use super::actions::{determine_action, Action, ActionContext, Mode};
use super::view;
use crate::catalog::BestPriceMode;
use crate::source::{CatalogFeed, CatalogSource, FeedUpdate};
use crate::view::{ViewCoordinator, ViewModel};

/// Clamp a row selection to the rows on screen.
pub fn clamp_selection(index: usize, row_count: usize) -> usize {
    if row_count == 0 {
        0
    } else {
        index.min(row_count - 1)
    }
}

/// Browser state: the coordinator plus everything purely visual.
pub struct BrowserApp {
    coordinator: ViewCoordinator,
    feed: CatalogFeed,
    source: Box<dyn CatalogSource>,
    mode: Mode,
    selected: usize,
    status: Option<String>,
}

impl BrowserApp {
    pub fn new(coordinator: ViewCoordinator, feed: CatalogFeed, source: Box<dyn CatalogSource>) -> Self {
        Self {
            coordinator,
            feed,
            source,
            mode: Mode::List,
            selected: 0,
            status: None,
        }
    }

    /// Handle a key. Returns `true` when the browser should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match determine_action(key, self.action_context()) {
            Some(action) => self.execute(action),
            None => false,
        }
    }

    fn action_context(&self) -> ActionContext {
        ActionContext {
            mode: self.mode,
            has_rows: self.page_len() > 0,
            has_search: !self.coordinator.search_text().is_empty(),
        }
    }

    /// Perform `action`. Returns `true` for quit.
    pub fn execute(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::EnterSearch => self.mode = Mode::Search,
            Action::ExitSearch => self.mode = Mode::List,
            Action::SearchInput(c) => {
                let mut text = self.coordinator.search_text().to_string();
                text.push(c);
                self.update_search(text);
            }
            Action::SearchBackspace => {
                let mut text = self.coordinator.search_text().to_string();
                if text.pop().is_some() {
                    self.update_search(text);
                }
            }
            Action::ClearSearch => self.update_search(String::new()),
            Action::Navigate(nav) => {
                if self.coordinator.navigate(nav) {
                    self.selected = 0;
                }
            }
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectNext => {
                self.selected = clamp_selection(self.selected + 1, self.page_len());
            }
            Action::ShowHelp => self.mode = Mode::Help,
            Action::CloseHelp => self.mode = Mode::List,
            Action::ToggleBestPriceMode => {
                let next = match self.coordinator.best_price_mode() {
                    BestPriceMode::Upstream => BestPriceMode::Recomputed,
                    BestPriceMode::Recomputed => BestPriceMode::Upstream,
                };
                self.coordinator.set_best_price_mode(next);
                self.status = Some(format!("Best price: {}", next.as_str()));
            }
            Action::Reload => self.reload(),
        }
        false
    }

    fn update_search(&mut self, text: String) {
        self.coordinator.set_search_text(text);
        self.selected = 0;
    }

    /// Refresh from the source. Failures keep the list currently shown.
    pub fn reload(&mut self) {
        let status = match self.feed.refresh(self.source.as_ref()) {
            FeedUpdate::Replaced { items } => {
                self.coordinator.set_items(self.feed.items());
                self.selected = clamp_selection(self.selected, self.page_len());
                format!("Loaded {items} items")
            }
            FeedUpdate::EmptyIgnored => "Catalog returned no items; showing cached list".to_string(),
            FeedUpdate::Failed { message } => {
                format!("Reload failed: {message}; showing cached list")
            }
        };
        self.status = Some(status);
    }

    pub fn render(&self, frame: &mut Frame) {
        view::render(frame, self);
    }

    fn page_len(&self) -> usize {
        self.coordinator.page_items().len()
    }

    pub fn coordinator(&self) -> &ViewCoordinator {
        &self.coordinator
    }

    pub fn view_model(&self) -> ViewModel {
        self.coordinator.view_model()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
