use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single retailer's price and stock data for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Retailer identifier (e.g. `"amazon"`)
    pub site: String,
    /// Human-readable retailer name, used as the table column
    pub site_name: String,
    pub original_price: f64,
    pub sale_price: f64,
    /// Discount percentage
    #[serde(default)]
    pub discount: f64,
    /// Outbound link to the offer
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub in_stock: bool,
}

/// One product (graphic novel) with its retailer quotes.
///
/// `best_price` is supplied by upstream and trusted as-is. It is optional on
/// the wire so that an incomplete record still loads; such an item simply
/// never has a best-priced quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub prices: Vec<PriceQuote>,
    #[serde(default)]
    pub best_price: Option<PriceQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl PriceQuote {
    pub fn new(site_name: impl Into<String>, original_price: f64, sale_price: f64) -> Self {
        let site_name = site_name.into();
        Self {
            site: site_name.to_lowercase().replace(' ', "-"),
            site_name,
            original_price,
            sale_price,
            discount: 0.0,
            url: String::new(),
            in_stock: true,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            record_id: None,
            id: id.into(),
            title: title.into(),
            normalized_title: None,
            image_url: None,
            category: String::new(),
            prices: Vec::new(),
            best_price: None,
            max_discount: None,
            last_updated: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Add a quote without touching `best_price`.
    pub fn with_quote(mut self, quote: PriceQuote) -> Self {
        self.prices.push(quote);
        self
    }

    pub fn with_best_price(mut self, best: PriceQuote) -> Self {
        self.best_price = Some(best);
        self
    }

    /// Mark the cheapest current quote as the upstream best price.
    pub fn with_cheapest_as_best(mut self) -> Self {
        self.best_price = self
            .prices
            .iter()
            .filter(|q| !q.sale_price.is_nan())
            .min_by(|a, b| a.sale_price.total_cmp(&b.sale_price))
            .cloned();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_deserialize_upstream_record() {
        let json = indoc! {r#"
            {
                "_id": "665f1c",
                "id": "saga-1",
                "title": "Saga Vol. 1",
                "normalizedTitle": "saga vol 1",
                "imageUrl": "https://img.example/saga.jpg",
                "category": "Sci-Fi",
                "prices": [
                    {
                        "site": "amazon",
                        "siteName": "Amazon",
                        "originalPrice": 14.99,
                        "salePrice": 9.99,
                        "discount": 33,
                        "url": "https://amazon.example/saga",
                        "inStock": true
                    }
                ],
                "bestPrice": {
                    "site": "amazon",
                    "siteName": "Amazon",
                    "originalPrice": 14.99,
                    "salePrice": 9.99,
                    "discount": 33,
                    "url": "https://amazon.example/saga",
                    "inStock": true
                },
                "maxDiscount": 33,
                "lastUpdated": "2024-05-01T12:00:00Z"
            }
        "#};

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.record_id.as_deref(), Some("665f1c"));
        assert_eq!(item.prices.len(), 1);
        assert_eq!(item.prices[0].site_name, "Amazon");
        assert_eq!(item.best_price.as_ref().map(|b| b.sale_price), Some(9.99));
        assert_eq!(item.max_discount, Some(33.0));
        assert!(item.last_updated.is_some());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id": "x", "title": "Untitled"}"#).unwrap();
        assert!(item.prices.is_empty());
        assert!(item.best_price.is_none());
        assert_eq!(item.category, "");
    }

    #[test]
    fn test_cheapest_as_best() {
        let item = CatalogItem::new("1", "Watchmen")
            .with_quote(PriceQuote::new("Amazon", 20.0, 15.0))
            .with_quote(PriceQuote::new("Bookshop", 20.0, 12.5))
            .with_cheapest_as_best();
        assert_eq!(item.best_price.map(|b| b.site_name), Some("Bookshop".into()));
    }
}
