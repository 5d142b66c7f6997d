//! Drawing of the browser screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::actions::{Mode, KEY_HELP};
use super::app::BrowserApp;
use super::theme::Theme;
use crate::output::offer_label;
use crate::view::{format_price, ViewModel};

pub fn render(frame: &mut Frame, app: &BrowserApp) {
    let theme = Theme::default();
    let model = app.view_model();

    let [search_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_search(frame, app, &model, search_area, &theme);
    render_table(frame, app, &model, table_area, &theme);
    render_footer(frame, app, &model, footer_area, &theme);

    if app.mode() == Mode::Help {
        render_help(frame, &theme);
    }
}

fn render_search(frame: &mut Frame, app: &BrowserApp, model: &ViewModel, area: Rect, theme: &Theme) {
    let editing = app.mode() == Mode::Search;
    let border = if editing {
        theme.focused_border_style()
    } else {
        theme.border_style()
    };

    let mut spans = vec![Span::styled(model.search_text.clone(), theme.text_style())];
    if editing {
        spans.push(Span::styled("▏", theme.accent_style()));
    } else if model.search_text.is_empty() {
        spans.push(Span::styled("press / to search titles", theme.muted_style()));
    }

    let title = if editing {
        " Search (Enter to apply, Esc to close) "
    } else {
        " Search "
    };

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .title(title)
            .border_style(border),
    );
    frame.render_widget(widget, area);
}

fn render_table(frame: &mut Frame, app: &BrowserApp, model: &ViewModel, area: Rect, theme: &Theme) {
    let title = format!(" omni-deals · best price: {} ", app.coordinator().best_price_mode().as_str());
    let block = Block::bordered().title(title).border_style(theme.border_style());

    if model.is_empty() {
        let message = if model.search_text.trim().is_empty() {
            "No items in catalog".to_string()
        } else {
            format!("No items match \"{}\"", model.search_text.trim())
        };
        let widget = Paragraph::new(Span::styled(message, theme.muted_style())).block(block);
        frame.render_widget(widget, area);
        return;
    }

    let mut header = vec![
        Cell::from("Title"),
        Cell::from("Category"),
        Cell::from("Original"),
    ];
    header.extend(model.columns.iter().map(|c| Cell::from(c.as_str())));

    let rows = model.rows.iter().map(|row| {
        let mut cells = vec![
            Cell::from(row.title.as_str()),
            Cell::from(Span::styled(row.category.as_str(), theme.muted_style())),
            Cell::from(row.original_price.map(format_price).unwrap_or_default()),
        ];
        cells.extend(row.cells.iter().map(|cell| {
            let label = offer_label(cell.offer.as_ref());
            let style = match &cell.offer {
                Some(offer) if offer.is_best => theme.best_style(),
                Some(offer) if !offer.in_stock => theme.muted_style(),
                Some(_) => theme.text_style(),
                None => theme.muted_style(),
            };
            Cell::from(Span::styled(label, style))
        }));
        Row::new(cells)
    });

    let widths = column_widths(model);
    let table = Table::new(rows, widths)
        .header(Row::new(header).style(theme.header_style()))
        .block(block)
        .row_highlight_style(theme.selected_style())
        .highlight_symbol("▸ ");

    let mut state = TableState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Title takes the slack; every other column is sized to its widest entry.
fn column_widths(model: &ViewModel) -> Vec<Constraint> {
    let mut widths = vec![
        Constraint::Min(20),
        Constraint::Length(widest(
            "Category",
            model.rows.iter().map(|r| r.category.clone()),
        )),
        Constraint::Length(widest(
            "Original",
            model
                .rows
                .iter()
                .map(|r| r.original_price.map(format_price).unwrap_or_default()),
        )),
    ];
    widths.extend(model.columns.iter().enumerate().map(|(i, retailer)| {
        Constraint::Length(widest(
            retailer,
            model
                .rows
                .iter()
                .map(|r| offer_label(r.cells.get(i).and_then(|c| c.offer.as_ref()))),
        ))
    }));
    widths
}

fn widest(header: &str, values: impl Iterator<Item = String>) -> u16 {
    let width = values
        .map(|v| v.width())
        .max()
        .unwrap_or(0)
        .max(header.width());
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn render_footer(frame: &mut Frame, app: &BrowserApp, model: &ViewModel, area: Rect, theme: &Theme) {
    let mut pages = vec![Span::styled(
        format!("Page {} of {}  ", model.current_page, model.total_pages),
        theme.text_style(),
    )];
    for &page in &model.page_window {
        let style = if page == model.current_page {
            theme.current_page_style()
        } else {
            theme.muted_style()
        };
        pages.push(Span::styled(format!(" {page} "), style));
    }
    pages.push(Span::styled(
        format!("  {} matching of {}", model.filtered_count, model.total_count),
        theme.muted_style(),
    ));

    let hint = match app.status() {
        Some(status) => Line::from(Span::styled(status.to_string(), theme.warning_style())),
        None => Line::from(Span::styled(
            "n/p page · g/G first/last · / search · ? help · q quit",
            theme.muted_style(),
        )),
    };

    frame.render_widget(Paragraph::new(vec![Line::from(pages), hint]), area);
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let height = u16::try_from(KEY_HELP.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(44, height, frame.area());

    let lines: Vec<Line> = KEY_HELP
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("{key:>10}  "), theme.accent_style()),
                Span::styled(*description, theme.text_style()),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(" Keys ")
                .border_style(theme.focused_border_style()),
        ),
        area,
    );
}

/// A `width` × `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
