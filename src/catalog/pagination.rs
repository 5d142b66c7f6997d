//! Fixed-size pages and the page-number window shown in pagination controls.
//!
//! Pages are 1-based. The window always anchors the first and last page and
//! shows a band of at most [`BAND_WIDTH`] pages around the current one, so the
//! control never grows past six buttons however many pages exist.

/// Maximum number of intermediate pages between the first and last page.
pub const BAND_WIDTH: usize = 4;

/// Half-width of the band around the current page.
const BAND_RADIUS: usize = 2;

/// Contiguous slice `[(page-1)*page_size, page*page_size)` clipped to bounds.
///
/// Page 0, a page past the end, or a zero page size yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(item_count / page_size)` with a floor of 1.
///
/// An empty set still reports one page ("page 1 of 1").
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    item_count.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Page numbers to render, ascending.
///
/// Always contains page 1 and, when more than one page exists, `total_pages`.
/// Between them sits a band of up to [`BAND_WIDTH`] pages covering
/// `current_page`. A band clipped against one edge is grown toward the other.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let total = total_pages.max(1);
    let current = clamp_page(current_page, total);

    let mut window = Vec::with_capacity(BAND_WIDTH + 2);
    window.push(1);
    if total == 1 {
        return window;
    }

    window.extend(band(current, total));
    window.push(total);
    window
}

// Intermediate pages strictly between 1 and `total`. Requires `total >= 2`.
fn band(current: usize, total: usize) -> std::ops::RangeInclusive<usize> {
    let first = 2;
    let last = total - 1;
    if last < first {
        return first..=last;
    }

    let mut start = current.saturating_sub(BAND_RADIUS).max(first);
    let mut end = (current + BAND_RADIUS).min(last);

    if end + 1 - start > BAND_WIDTH {
        end = start + BAND_WIDTH - 1;
    }
    if end + 1 - start < BAND_WIDTH {
        if start == first {
            end = (start + BAND_WIDTH - 1).min(last);
        } else if end == last {
            start = (end + 1).saturating_sub(BAND_WIDTH).max(first);
        }
    }
    start..=end
}

/// A page navigation request from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNavigation {
    First,
    Previous,
    Next,
    Last,
    Goto(usize),
}

/// Resolve a navigation request.
///
/// Targets outside `[1, total_pages]` are clamped. Returns `None` when the
/// request would leave the page unchanged.
pub fn resolve_navigation(
    nav: PageNavigation,
    current_page: usize,
    total_pages: usize,
) -> Option<usize> {
    let total = total_pages.max(1);
    let current = clamp_page(current_page, total);
    let target = match nav {
        PageNavigation::First => 1,
        PageNavigation::Previous => current.saturating_sub(1),
        PageNavigation::Next => current.saturating_add(1),
        PageNavigation::Last => total,
        PageNavigation::Goto(page) => page,
    };
    let target = clamp_page(target, total);
    (target != current_page).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(120, 50), 3);
        assert_eq!(total_pages(10, 0), 1);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(paginate(&items, 1, 3), &[1, 2, 3]);
        assert_eq!(paginate(&items, 2, 3), &[4, 5, 6]);
        assert_eq!(paginate(&items, 3, 3), &[7]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=7).collect();
        assert!(paginate(&items, 4, 3).is_empty());
        assert!(paginate(&items, 0, 3).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(paginate(&items, usize::MAX, 3).is_empty());
        assert!(paginate::<u32>(&[], 1, 50).is_empty());
    }

    #[test]
    fn test_single_page_window() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(1, 0), vec![1]);
        assert_eq!(page_window(5, 1), vec![1]);
    }

    #[test]
    fn test_two_and_small_page_counts() {
        assert_eq!(page_window(1, 2), vec![1, 2]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(1, 6), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5, 10]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5, 10]);
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(page_window(10, 10), vec![1, 6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![1, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(page_window(5, 10), vec![1, 3, 4, 5, 6, 10]);
        assert_eq!(page_window(50, 100), vec![1, 48, 49, 50, 51, 100]);
    }

    #[test]
    fn test_window_clamps_current_page() {
        assert_eq!(page_window(42, 10), page_window(10, 10));
        assert_eq!(page_window(0, 10), page_window(1, 10));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(resolve_navigation(PageNavigation::Next, 1, 3), Some(2));
        assert_eq!(resolve_navigation(PageNavigation::Previous, 2, 3), Some(1));
        assert_eq!(resolve_navigation(PageNavigation::Last, 1, 3), Some(3));
        assert_eq!(resolve_navigation(PageNavigation::First, 3, 3), Some(1));
        assert_eq!(resolve_navigation(PageNavigation::Goto(2), 1, 3), Some(2));
    }

    #[test]
    fn test_navigation_noops_and_clamping() {
        assert_eq!(resolve_navigation(PageNavigation::Previous, 1, 3), None);
        assert_eq!(resolve_navigation(PageNavigation::Next, 3, 3), None);
        assert_eq!(resolve_navigation(PageNavigation::Goto(2), 2, 3), None);
        assert_eq!(resolve_navigation(PageNavigation::Goto(99), 1, 3), Some(3));
        assert_eq!(resolve_navigation(PageNavigation::Goto(0), 2, 3), Some(1));
        // A stale page beyond the end is pulled back in.
        assert_eq!(resolve_navigation(PageNavigation::Next, 7, 3), Some(3));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: concatenating every page reconstructs the list exactly.
        #[test]
        fn pages_reconstruct_list(len in 0usize..500, page_size in 1usize..60) {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(items.len(), page_size);
            let rebuilt: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&items, p, page_size).iter().copied())
                .collect();
            prop_assert!(paginate(&items, pages + 1, page_size).is_empty());
            prop_assert_eq!(rebuilt, items);
        }

        /// Property: the window is ascending, bounded and anchored.
        #[test]
        fn window_shape(total in 1usize..300, current in 0usize..320) {
            let window = page_window(current, total);

            prop_assert!(window.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(window[0], 1);
            prop_assert_eq!(*window.last().unwrap(), total);
            prop_assert!(window.len() <= BAND_WIDTH + 2);
            prop_assert!(window.contains(&clamp_page(current, total)));
        }

        /// Property: the band is full width whenever enough pages exist.
        #[test]
        fn window_full_when_possible(total in 6usize..300, current in 1usize..300) {
            let current = current.min(total);
            prop_assert_eq!(page_window(current, total).len(), BAND_WIDTH + 2);
        }

        /// Property: resolved targets always fall inside the page range.
        #[test]
        fn navigation_in_bounds(total in 1usize..100, current in 1usize..100, goto in 0usize..200) {
            let current = current.min(total);
            for nav in [
                PageNavigation::First,
                PageNavigation::Previous,
                PageNavigation::Next,
                PageNavigation::Last,
                PageNavigation::Goto(goto),
            ] {
                if let Some(target) = resolve_navigation(nav, current, total) {
                    prop_assert!((1..=total).contains(&target));
                    prop_assert_ne!(target, current);
                }
            }
        }
    }
}
