//! Best-price determination per catalog item.
//!
//! The reference behaviour trusts the upstream `bestPrice` record and compares
//! sale prices with plain numeric equality. Ties are not broken: every quote
//! whose sale price equals the best price is marked best.

use serde::{Deserialize, Serialize};

use crate::core::{CatalogItem, PriceQuote};

/// Where the best sale price for an item comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BestPriceMode {
    /// Compare against the upstream `bestPrice.salePrice`.
    #[default]
    Upstream,
    /// Compare against the lowest sale price among the item's quotes.
    Recomputed,
}

impl BestPriceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BestPriceMode::Upstream => "upstream",
            BestPriceMode::Recomputed => "recomputed",
        }
    }
}

impl std::str::FromStr for BestPriceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upstream" => Ok(BestPriceMode::Upstream),
            "recomputed" => Ok(BestPriceMode::Recomputed),
            other => Err(format!(
                "unknown best price mode '{other}' (expected 'upstream' or 'recomputed')"
            )),
        }
    }
}

/// True iff `quote` is present and its sale price equals the item's upstream
/// best sale price.
///
/// An absent quote is never best, and neither is any quote of an item that
/// lacks a `bestPrice` record.
#[allow(clippy::float_cmp)]
pub fn is_best(quote: Option<&PriceQuote>, item: &CatalogItem) -> bool {
    match (quote, item.best_price.as_ref()) {
        (Some(quote), Some(best)) => quote.sale_price == best.sale_price,
        _ => false,
    }
}

/// Mode-aware variant of [`is_best`].
#[allow(clippy::float_cmp)]
pub fn is_best_with(quote: Option<&PriceQuote>, item: &CatalogItem, mode: BestPriceMode) -> bool {
    match mode {
        BestPriceMode::Upstream => is_best(quote, item),
        BestPriceMode::Recomputed => match (quote, lowest_sale_price(item)) {
            (Some(quote), Some(lowest)) => quote.sale_price == lowest,
            _ => false,
        },
    }
}

/// Best sale price for an item under the given mode.
pub fn best_sale_price(item: &CatalogItem, mode: BestPriceMode) -> Option<f64> {
    match mode {
        BestPriceMode::Upstream => item.best_price.as_ref().map(|b| b.sale_price),
        BestPriceMode::Recomputed => lowest_sale_price(item),
    }
}

/// Lowest sale price among the item's quotes, ignoring NaN.
pub fn lowest_sale_price(item: &CatalogItem) -> Option<f64> {
    item.prices
        .iter()
        .map(|quote| quote.sale_price)
        .filter(|price| !price.is_nan())
        .min_by(f64::total_cmp)
}

/// Disagreement between the upstream best price and the local minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPriceDrift {
    pub item_id: String,
    /// `None` when upstream supplied no `bestPrice`.
    pub upstream: Option<f64>,
    pub lowest: f64,
}

/// Report an item whose upstream best price is missing or differs from the
/// cheapest quote it carries. Items without quotes never drift.
#[allow(clippy::float_cmp)]
pub fn best_price_drift(item: &CatalogItem) -> Option<BestPriceDrift> {
    let lowest = lowest_sale_price(item)?;
    let upstream = item.best_price.as_ref().map(|b| b.sale_price);
    if upstream == Some(lowest) {
        return None;
    }
    Some(BestPriceDrift {
        item_id: item.id.clone(),
        upstream,
        lowest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saga() -> CatalogItem {
        CatalogItem::new("saga-1", "Saga Vol. 1")
            .with_quote(PriceQuote::new("Amazon", 14.99, 9.99))
            .with_quote(PriceQuote::new("Bookshop", 14.99, 11.50))
            .with_cheapest_as_best()
    }

    #[test]
    fn test_cheapest_quote_is_best() {
        let item = saga();
        assert!(is_best(item.prices.first(), &item));
        assert!(!is_best(item.prices.get(1), &item));
    }

    #[test]
    fn test_absent_quote_never_best() {
        let item = saga();
        assert!(!is_best(None, &item));
        assert!(!is_best_with(None, &item, BestPriceMode::Recomputed));
    }

    #[test]
    fn test_missing_best_price_never_best() {
        let mut item = saga();
        item.best_price = None;
        assert!(!is_best(item.prices.first(), &item));
    }

    #[test]
    fn test_ties_are_not_broken() {
        let item = CatalogItem::new("tie", "Tie")
            .with_quote(PriceQuote::new("Amazon", 20.0, 10.0))
            .with_quote(PriceQuote::new("Bookshop", 25.0, 10.0))
            .with_cheapest_as_best();
        assert!(item.prices.iter().all(|q| is_best(Some(q), &item)));
    }

    #[test]
    fn test_upstream_trusted_over_local_minimum() {
        // Upstream claims Bookshop is best although Amazon is cheaper.
        let bookshop = PriceQuote::new("Bookshop", 14.99, 11.50);
        let item = CatalogItem::new("stale", "Stale")
            .with_quote(PriceQuote::new("Amazon", 14.99, 9.99))
            .with_quote(bookshop.clone())
            .with_best_price(bookshop);

        assert!(!is_best(item.prices.first(), &item));
        assert!(is_best(item.prices.get(1), &item));

        assert!(is_best_with(item.prices.first(), &item, BestPriceMode::Recomputed));
        assert!(!is_best_with(item.prices.get(1), &item, BestPriceMode::Recomputed));
    }

    #[test]
    fn test_drift_detection() {
        assert_eq!(best_price_drift(&saga()), None);

        let mut stale = saga();
        stale.best_price = Some(PriceQuote::new("Bookshop", 14.99, 11.50));
        assert_eq!(
            best_price_drift(&stale),
            Some(BestPriceDrift {
                item_id: "saga-1".into(),
                upstream: Some(11.50),
                lowest: 9.99,
            })
        );

        assert_eq!(best_price_drift(&CatalogItem::new("empty", "Empty")), None);
    }

    #[test]
    fn test_lowest_sale_price_ignores_nan() {
        let item = CatalogItem::new("n", "NaN")
            .with_quote(PriceQuote::new("Amazon", 10.0, f64::NAN))
            .with_quote(PriceQuote::new("Bookshop", 10.0, 8.0));
        assert_eq!(lowest_sale_price(&item), Some(8.0));
        assert_eq!(best_sale_price(&item, BestPriceMode::Recomputed), Some(8.0));
        assert_eq!(best_sale_price(&item, BestPriceMode::Upstream), None);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("upstream".parse(), Ok(BestPriceMode::Upstream));
        assert_eq!(" Recomputed ".parse(), Ok(BestPriceMode::Recomputed));
        assert!("cheapest".parse::<BestPriceMode>().is_err());
    }
}
