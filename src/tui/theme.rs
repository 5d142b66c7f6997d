//! Color theme for the catalog browser.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the browser.
pub struct Theme {
    /// Accent color (cyan for focus and the current page)
    pub primary: Color,
    /// Best price highlight
    pub success: Color,
    /// Secondary text and missing offers
    pub muted: Color,
    /// Normal text
    pub text: Color,
    /// Status messages
    pub warning: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            warning: Color::Yellow,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Column headings of the comparison table
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Cell holding the best price for its row
    pub fn best_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn current_page_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
