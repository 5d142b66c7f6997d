//! Pure key → action mapping for the catalog browser.
//!
//! `determine_action` decides what a key means in the current mode without
//! touching any state; `BrowserApp::execute` performs it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::PageNavigation;

/// Input mode of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Table has focus
    #[default]
    List,
    /// Keystrokes edit the search text
    Search,
    /// Key reference overlay
    Help,
}

/// Everything a key can ask the browser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    EnterSearch,
    ExitSearch,
    /// Append a character to the search text
    SearchInput(char),
    /// Remove the last character of the search text
    SearchBackspace,
    ClearSearch,
    Navigate(PageNavigation),
    SelectPrevious,
    SelectNext,
    ShowHelp,
    CloseHelp,
    ToggleBestPriceMode,
    Reload,
}

/// State needed to evaluate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub mode: Mode,
    /// Whether the current page shows any rows
    pub has_rows: bool,
    /// Whether a search is active
    pub has_search: bool,
}

impl ActionContext {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            has_rows: true,
            has_search: false,
        }
    }
}

/// Which action a key triggers, or `None` when it means nothing here.
pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<Action> {
    match ctx.mode {
        Mode::List => list_action(key, ctx),
        Mode::Search => search_action(key),
        Mode::Help => help_action(key),
    }
}

fn list_action(key: KeyEvent, ctx: ActionContext) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::EnterSearch),

        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
            Some(Action::Navigate(PageNavigation::Next))
        }
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
            Some(Action::Navigate(PageNavigation::Previous))
        }
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Navigate(PageNavigation::First)),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Navigate(PageNavigation::Last)),

        KeyCode::Char('k') | KeyCode::Up if ctx.has_rows => Some(Action::SelectPrevious),
        KeyCode::Char('j') | KeyCode::Down if ctx.has_rows => Some(Action::SelectNext),

        KeyCode::Esc if ctx.has_search => Some(Action::ClearSearch),

        KeyCode::Char('b') => Some(Action::ToggleBestPriceMode),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char('?') => Some(Action::ShowHelp),

        _ => None,
    }
}

fn search_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Action::ExitSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearSearch)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SearchInput(c))
        }
        _ => None,
    }
}

fn help_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
            Some(Action::CloseHelp)
        }
        _ => None,
    }
}

/// Key reference shown in the help overlay.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("q", "quit"),
    ("/", "search titles"),
    ("n / →", "next page"),
    ("p / ←", "previous page"),
    ("g / Home", "first page"),
    ("G / End", "last page"),
    ("j / k", "select row"),
    ("Esc", "clear search"),
    ("b", "toggle best price mode"),
    ("r", "reload catalog"),
    ("?", "this help"),
];
