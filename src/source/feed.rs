//! Authoritative catalog list with stale-on-failure semantics.
//!
//! A successful, non-empty load replaces the current list. A failed load or
//! an empty payload keeps the last good list, so consumers keep browsing the
//! stale data until a usable list arrives.

use std::sync::Arc;

use super::CatalogSource;
use crate::core::CatalogItem;

/// Outcome of one refresh attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedUpdate {
    /// A new list was installed
    Replaced { items: usize },
    /// The source returned nothing; the previous list is kept
    EmptyIgnored,
    /// The source failed; the previous list is kept
    Failed { message: String },
}

impl FeedUpdate {
    pub fn is_replaced(&self) -> bool {
        matches!(self, FeedUpdate::Replaced { .. })
    }
}

/// Holder of the last good catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogFeed {
    items: Arc<Vec<CatalogItem>>,
    last_error: Option<String>,
    generation: u64,
}

impl CatalogFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `source` and install the result if it is usable.
    pub fn refresh(&mut self, source: &dyn CatalogSource) -> FeedUpdate {
        let _span = tracing::info_span!("catalog_refresh", source = %source.describe()).entered();

        match source.load() {
            Ok(items) if items.is_empty() => {
                log::info!(
                    "Catalog source {} returned no items; keeping {} cached items",
                    source.describe(),
                    self.items.len()
                );
                FeedUpdate::EmptyIgnored
            }
            Ok(items) => {
                let count = items.len();
                self.items = Arc::new(items);
                self.last_error = None;
                self.generation += 1;
                log::info!("Loaded {} catalog items from {}", count, source.describe());
                FeedUpdate::Replaced { items: count }
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!(
                    "Catalog refresh from {} failed: {}; keeping {} cached items",
                    source.describe(),
                    message,
                    self.items.len()
                );
                self.last_error = Some(message.clone());
                FeedUpdate::Failed { message }
            }
        }
    }

    /// The current list (empty before the first successful load).
    pub fn items(&self) -> Arc<Vec<CatalogItem>> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Message of the most recent failed refresh, cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of lists installed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
