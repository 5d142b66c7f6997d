//! Outbound view-model consumed by the presentation layers.
//!
//! One render cycle exposes the retailer columns, the rows of the current
//! page with a cell per retailer, and the pagination state.

use serde::Serialize;

use crate::catalog::{is_best_with, BestPriceMode, PriceIndex};
use crate::core::{CatalogItem, PriceQuote};

/// Everything a presentation layer needs to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub search_text: String,
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_window: Vec<usize>,
    /// Items matching the search across all pages
    pub filtered_count: usize,
    /// Items in the catalog
    pub total_count: usize,
}

/// One catalog item on the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Original price of the upstream best offer
    pub original_price: Option<f64>,
    /// One cell per column, in column order
    pub cells: Vec<CellView>,
}

/// One `(item, retailer)` cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub retailer: String,
    /// `None` when the retailer has no offer for this item
    pub offer: Option<OfferView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferView {
    pub sale_price: f64,
    pub original_price: f64,
    pub discount: f64,
    pub url: String,
    pub in_stock: bool,
    pub is_best: bool,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Best-price flag for the cell at `(row, retailer)`; false when absent.
    pub fn is_best(&self, row: usize, retailer: &str) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.cell(retailer))
            .and_then(|c| c.offer.as_ref())
            .is_some_and(|offer| offer.is_best)
    }
}

impl RowView {
    pub fn cell(&self, retailer: &str) -> Option<&CellView> {
        self.cells.iter().find(|cell| cell.retailer == retailer)
    }

    /// Retailers holding the best-price marker for this row.
    pub fn best_retailers(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .filter(|cell| cell.offer.as_ref().is_some_and(|o| o.is_best))
            .map(|cell| cell.retailer.as_str())
    }
}

impl OfferView {
    fn from_quote(quote: &PriceQuote, is_best: bool) -> Self {
        Self {
            sale_price: quote.sale_price,
            original_price: quote.original_price,
            discount: quote.discount,
            url: quote.url.clone(),
            in_stock: quote.in_stock,
            is_best,
        }
    }
}

/// Build rows for `items` against `columns`.
pub fn build_rows(items: &[&CatalogItem], columns: &[String], mode: BestPriceMode) -> Vec<RowView> {
    let index = PriceIndex::with_columns(items, columns.to_vec());
    items
        .iter()
        .enumerate()
        .map(|(row, item)| RowView {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category.clone(),
            original_price: item.best_price.as_ref().map(|b| b.original_price),
            cells: index
                .columns()
                .iter()
                .map(|retailer| {
                    let quote = index.get(row, retailer);
                    CellView {
                        retailer: retailer.clone(),
                        offer: quote
                            .map(|q| OfferView::from_quote(q, is_best_with(quote, item, mode))),
                    }
                })
                .collect(),
        })
        .collect()
}

/// `$` followed by two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Discount suffix shown after a sale price, only for positive discounts.
pub fn format_discount(discount: f64) -> Option<String> {
    (discount > 0.0).then(|| {
        if discount.fract() == 0.0 {
            format!("{discount:.0}% OFF")
        } else {
            format!("{discount:.1}% OFF")
        }
    })
}

/// Compact page window label, e.g. `[1] 2 3 4 5 10`.
pub fn format_page_window(window: &[usize], current_page: usize) -> String {
    window
        .iter()
        .map(|&page| {
            if page == current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
