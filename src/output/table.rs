//! Terminal table rendering of a [`ViewModel`].

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::view::{format_discount, format_page_window, format_price, OfferView, ViewModel};

/// Marker placed in front of a best-price cell.
pub const BEST_MARKER: &str = "★";
/// Shown when a retailer has no offer for the item.
pub const NO_OFFER: &str = "-";

/// Text of a single retailer cell.
pub fn offer_label(offer: Option<&OfferView>) -> String {
    let Some(offer) = offer else {
        return NO_OFFER.to_string();
    };

    let mut label = format_price(offer.sale_price);
    if let Some(discount) = format_discount(offer.discount) {
        label.push_str(" / ");
        label.push_str(&discount);
    }
    if !offer.in_stock {
        label.push_str(" (sold out)");
    }
    if offer.is_best {
        label = format!("{BEST_MARKER} {label}");
    }
    label
}

/// `Page X of Y · [1] 2 3 4 5 10 · N matching of M`
pub fn render_footer(view: &ViewModel) -> String {
    format!(
        "Page {} of {} · {} · {} matching of {}",
        view.current_page,
        view.total_pages,
        format_page_window(&view.page_window, view.current_page),
        view.filtered_count,
        view.total_count
    )
}

fn build_table(view: &ViewModel, width: Option<u16>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    match width {
        Some(width) => {
            table
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_width(width);
        }
        None => {
            table
                .force_no_tty()
                .set_content_arrangement(ContentArrangement::Disabled);
        }
    }

    let mut header = vec![
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Original").add_attribute(Attribute::Bold),
    ];
    header.extend(
        view.columns
            .iter()
            .map(|retailer| Cell::new(retailer).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for row in &view.rows {
        let mut cells = vec![
            Cell::new(&row.title),
            Cell::new(&row.category),
            Cell::new(row.original_price.map(format_price).unwrap_or_default())
                .set_alignment(CellAlignment::Right),
        ];
        cells.extend(row.cells.iter().map(|cell| {
            let offer = cell.offer.as_ref();
            let rendered = Cell::new(offer_label(offer)).set_alignment(CellAlignment::Right);
            if offer.is_some_and(|o| o.is_best) {
                rendered.add_attribute(Attribute::Bold)
            } else {
                rendered
            }
        }));
        table.add_row(cells);
    }

    table
}

/// Comparison table followed by the pagination footer.
///
/// With a `width`, columns wrap to fit it. Without one the table is laid out
/// unconstrained and unstyled.
pub fn render_table(view: &ViewModel, width: Option<u16>) -> String {
    let mut out = String::new();

    if view.is_empty() {
        if view.search_text.trim().is_empty() {
            out.push_str("No items in catalog\n");
        } else {
            out.push_str(&format!("No items match \"{}\"\n", view.search_text.trim()));
        }
    } else {
        out.push_str(&build_table(view, width).to_string());
        out.push('\n');
    }

    out.push_str(&render_footer(view));
    out.push('\n');
    out
}
