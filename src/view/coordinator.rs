//! Coordinated search text and page state.
//!
//! The coordinator is the single writer of the search text and current page.
//! Everything else (filtered set, retailer columns, page slice, page window)
//! is derived and memoized by its inputs:
//!
//! | Derived value    | Key                                      |
//! |------------------|------------------------------------------|
//! | filtered indices | catalog version, normalized query        |
//! | columns          | catalog version                          |
//! | page window      | filtered count, current page, page size  |

use std::sync::Arc;

use super::memo::Memo;
use super::view_model::{build_rows, ViewModel};
use crate::catalog::{
    best_price_drift, clamp_page, matching_indices, page_window, paginate, resolve_navigation,
    total_pages, BestPriceMode, PageNavigation, SearchQuery,
};
use crate::core::CatalogItem;

/// Items per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Owner of the browsing state over one catalog.
#[derive(Debug, Clone)]
pub struct ViewCoordinator {
    items: Arc<Vec<CatalogItem>>,
    /// Bumped whenever a new item list is installed
    version: u64,
    search_text: String,
    query: SearchQuery,
    current_page: usize,
    page_size: usize,
    best_price_mode: BestPriceMode,
    filtered: Memo<(u64, SearchQuery), Vec<usize>>,
    columns: Memo<u64, Vec<String>>,
    window: Memo<(usize, usize, usize), Vec<usize>>,
}

impl Default for ViewCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewCoordinator {
    /// Create a coordinator over an empty catalog. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        let mut coordinator = Self {
            items: Arc::new(Vec::new()),
            version: 0,
            search_text: String::new(),
            query: SearchQuery::default(),
            current_page: 1,
            page_size: page_size.max(1),
            best_price_mode: BestPriceMode::default(),
            filtered: Memo::new(),
            columns: Memo::new(),
            window: Memo::new(),
        };
        coordinator.refresh();
        coordinator
    }

    pub fn with_best_price_mode(mut self, mode: BestPriceMode) -> Self {
        self.best_price_mode = mode;
        self
    }

    pub fn with_items(mut self, items: impl Into<Arc<Vec<CatalogItem>>>) -> Self {
        self.set_items(items);
        self
    }

    /// Install a new authoritative item list.
    ///
    /// Search text is kept. The current page is kept unless it now lies past
    /// the last page, in which case it is pulled back to the last page.
    pub fn set_items(&mut self, items: impl Into<Arc<Vec<CatalogItem>>>) {
        self.items = items.into();
        self.version += 1;

        let drifted = self
            .items
            .iter()
            .filter(|item| best_price_drift(item).is_some())
            .count();
        if drifted > 0 {
            log::warn!(
                "{} of {} catalog items carry a best price that is not their lowest quote",
                drifted,
                self.items.len()
            );
        }
        log::debug!(
            "Installed catalog version {} with {} items",
            self.version,
            self.items.len()
        );

        self.refresh();
        let clamped = clamp_page(self.current_page, self.total_pages());
        if clamped != self.current_page {
            self.current_page = clamped;
            self.refresh();
        }
    }

    /// Replace the search text. Always returns to page 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.query = SearchQuery::parse(&self.search_text);
        self.current_page = 1;
        self.refresh();
    }

    /// Jump to `page`, clamped into the valid range. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let target = clamp_page(page, self.total_pages());
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        self.refresh();
        true
    }

    /// Apply a navigation request. Requests that would not move are no-ops.
    pub fn navigate(&mut self, nav: PageNavigation) -> bool {
        match resolve_navigation(nav, self.current_page, self.total_pages()) {
            Some(target) => self.set_page(target),
            None => false,
        }
    }

    pub fn set_best_price_mode(&mut self, mode: BestPriceMode) {
        self.best_price_mode = mode;
    }

    // Recompute derived values whose inputs changed.
    fn refresh(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_view",
            version = self.version,
            page = self.current_page
        )
        .entered();

        let items = &self.items;
        let query = &self.query;
        let filtered_count = self
            .filtered
            .get_or_update((self.version, query.clone()), || {
                matching_indices(items, query)
            })
            .len();

        self.columns
            .get_or_update(self.version, || crate::catalog::columns(items.iter()));

        let pages = total_pages(filtered_count, self.page_size);
        let current = self.current_page;
        self.window
            .get_or_update((filtered_count, current, self.page_size), || {
                page_window(current, pages)
            });
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn best_price_mode(&self) -> BestPriceMode {
        self.best_price_mode
    }

    /// Positions (into [`Self::items`]) of the items matching the search.
    pub fn filtered_indices(&self) -> &[usize] {
        self.filtered.get().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices().len()
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.filtered_indices()
            .iter()
            .filter_map(|&idx| self.items.get(idx))
    }

    /// Sorted retailer names across the whole catalog.
    pub fn columns(&self) -> &[String] {
        self.columns.get().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    pub fn page_window(&self) -> &[usize] {
        self.window.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Items on the current page, in filtered order.
    pub fn page_items(&self) -> Vec<&CatalogItem> {
        paginate(self.filtered_indices(), self.current_page, self.page_size)
            .iter()
            .filter_map(|&idx| self.items.get(idx))
            .collect()
    }

    /// Assemble the view-model for the current state.
    pub fn view_model(&self) -> ViewModel {
        let page_items = self.page_items();
        ViewModel {
            search_text: self.search_text.clone(),
            columns: self.columns().to_vec(),
            rows: build_rows(&page_items, self.columns(), self.best_price_mode),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            page_window: self.page_window().to_vec(),
            filtered_count: self.filtered_count(),
            total_count: self.items.len(),
        }
    }

    /// Number of times the filtered set has been recomputed.
    pub fn filter_recomputations(&self) -> u64 {
        self.filtered.recomputations()
    }

    /// Number of times the page window has been recomputed.
    pub fn window_recomputations(&self) -> u64 {
        self.window.recomputations()
    }
}
