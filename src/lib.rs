// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod observability;
pub mod output;
pub mod source;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use crate::core::{CatalogItem, Error, PriceQuote, Result};

pub use crate::catalog::{
    columns, filter, is_best, is_best_with, page_window, paginate, quote_for, total_pages,
    BestPriceMode, PageNavigation, PriceIndex, SearchQuery,
};

pub use crate::config::{load_config, OmniConfig};

pub use crate::source::{parse_catalog, CatalogFeed, CatalogSource, JsonFileSource, StaticSource};

pub use crate::view::{ViewCoordinator, ViewModel, DEFAULT_PAGE_SIZE};
