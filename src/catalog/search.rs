//! Free-text title search.
//!
//! Matching is case-insensitive substring containment on the item title.
//! A blank query (empty or whitespace-only) filters nothing. Otherwise the
//! query is matched as typed, surrounding spaces included.

use crate::core::CatalogItem;

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Normalize raw search text by case-folding it.
    ///
    /// Whitespace-only text parses as blank.
    pub fn parse(text: &str) -> Self {
        let needle = (!text.trim().is_empty()).then(|| text.to_lowercase());
        Self { needle }
    }

    /// True when the query filters nothing.
    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    /// The case-folded needle, if any.
    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => item.title.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Items whose title contains `query`, in input order.
///
/// A blank query returns every item unchanged.
pub fn filter<'a>(items: &'a [CatalogItem], query: &str) -> Vec<&'a CatalogItem> {
    let query = SearchQuery::parse(query);
    items.iter().filter(|item| query.matches(item)).collect()
}

/// Positions of the matching items in `items`, ascending.
pub fn matching_indices(items: &[CatalogItem], query: &SearchQuery) -> Vec<usize> {
    if query.is_blank() {
        return (0..items.len()).collect();
    }
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| query.matches(item))
        .map(|(idx, _)| idx)
        .collect()
}
