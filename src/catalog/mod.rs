//! Pure price-comparison pipeline over an in-memory catalog.
//!
//! raw items → [`search`] → [`pagination`] → [`index`] per row →
//! [`best_price`] per cell.
//!
//! Every function here is synchronous and side-effect free.

pub mod best_price;
pub mod index;
pub mod pagination;
pub mod search;

pub use best_price::{
    best_price_drift, best_sale_price, is_best, is_best_with, lowest_sale_price, BestPriceDrift,
    BestPriceMode,
};
pub use index::{columns, quote_for, PriceIndex};
pub use pagination::{
    clamp_page, page_window, paginate, resolve_navigation, total_pages, PageNavigation,
    BAND_WIDTH,
};
pub use search::{filter, matching_indices, SearchQuery};
