//! Retailer columns and per-item quote lookup.
//!
//! Columns are the sorted, deduplicated union of `siteName` values across an
//! item set. Lookups resolve `(item, retailer)` to the first matching quote,
//! or `None` when the retailer has no offer for that item.

use std::collections::{BTreeSet, HashMap};

use crate::core::{CatalogItem, PriceQuote};

/// Sorted, deduplicated retailer names across `items`.
///
/// Independent of input order. Items without quotes contribute nothing.
pub fn columns<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items
        .into_iter()
        .flat_map(|item| item.prices.iter())
        .map(|quote| quote.site_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// The quote whose retailer name exactly matches `retailer`.
pub fn quote_for<'a>(item: &'a CatalogItem, retailer: &str) -> Option<&'a PriceQuote> {
    item.prices.iter().find(|quote| quote.site_name == retailer)
}

/// Precomputed lookup for a set of rows.
///
/// Built once per page so that rendering `rows × columns` cells does not scan
/// each item's quote list per cell.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex<'a> {
    columns: Vec<String>,
    rows: Vec<HashMap<&'a str, &'a PriceQuote>>,
}

impl<'a> PriceIndex<'a> {
    /// Build an index whose columns are derived from `items` themselves.
    pub fn build(items: &[&'a CatalogItem]) -> Self {
        let columns = columns(items.iter().copied());
        Self::with_columns(items, columns)
    }

    /// Build an index over `items` against an externally chosen column set.
    pub fn with_columns(items: &[&'a CatalogItem], columns: Vec<String>) -> Self {
        let rows = items.iter().map(|&item| row_lookup(item)).collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Quote for the row at `row` and retailer `retailer`.
    pub fn get(&self, row: usize, retailer: &str) -> Option<&'a PriceQuote> {
        self.rows
            .get(row)
            .and_then(|lookup| lookup.get(retailer).copied())
    }
}

// First quote per retailer wins, matching `quote_for`.
fn row_lookup(item: &CatalogItem) -> HashMap<&str, &PriceQuote> {
    let mut lookup = HashMap::with_capacity(item.prices.len());
    for quote in &item.prices {
        lookup.entry(quote.site_name.as_str()).or_insert(quote);
    }
    lookup
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_item() -> impl Strategy<Value = CatalogItem> {
        prop::collection::vec("[A-D][a-z]{0,3}", 0..5).prop_map(|stores| {
            stores
                .into_iter()
                .fold(CatalogItem::new("id", "title"), |item, store| {
                    item.with_quote(PriceQuote::new(store, 10.0, 8.0))
                })
        })
    }

    proptest! {
        /// Property: columns are strictly ascending (sorted, no duplicates).
        #[test]
        fn columns_strictly_ascending(items in prop::collection::vec(arb_item(), 0..10)) {
            let cols = columns(&items);
            prop_assert!(cols.windows(2).all(|w| w[0] < w[1]));
        }

        /// Property: columns do not depend on input order.
        #[test]
        fn columns_order_independent(items in prop::collection::vec(arb_item(), 0..10)) {
            let mut reversed = items.clone();
            reversed.reverse();
            prop_assert_eq!(columns(&items), columns(&reversed));
        }

        /// Property: a retailer absent from an item's quotes is never found.
        #[test]
        fn absent_retailer_not_found(item in arb_item(), name in "[e-z]{1,4}") {
            prop_assert!(quote_for(&item, &name).is_none());
        }
    }
}
