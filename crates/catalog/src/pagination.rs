//! A growing-prefix view over a dynamic list.
//!
//! Listings render the first `n` items of whatever list is current and grow
//! `n` one page at a time ("load more"). When the underlying list is
//! replaced - a new search result set, say - the window resets to a single
//! page even if the new list happens to have the same length: relevance
//! changed, not size, and showing 30 items of a fresh query would be wrong.

/// A paging window over an owned list.
#[derive(Debug, Clone)]
pub struct PageWindow<T> {
    items: Vec<T>,
    page_size: usize,
    items_to_show: usize,
}

impl<T> PageWindow<T> {
    /// Create an empty window with the given page size (minimum 1).
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self::with_items(page_size, Vec::new())
    }

    /// Create a window over an initial list.
    #[must_use]
    pub fn with_items(page_size: usize, items: Vec<T>) -> Self {
        let page_size = page_size.max(1);
        Self {
            items,
            page_size,
            items_to_show: page_size,
        }
    }

    /// Replace the underlying list, resetting the window to one page.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.items_to_show = self.page_size;
    }

    /// The currently visible prefix.
    #[must_use]
    pub fn current(&self) -> &[T] {
        let shown = self.items_to_show.min(self.items.len());
        self.items.get(..shown).unwrap_or_default()
    }

    /// Whether more items exist beyond the visible prefix.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.items_to_show < self.items.len()
    }

    /// Grow the window by one page.
    pub fn load_more(&mut self) {
        self.items_to_show += self.page_size;
    }

    /// Number of currently visible items.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.current().len()
    }

    /// Total number of items in the underlying list.
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }
}
