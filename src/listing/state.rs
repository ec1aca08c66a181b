use super::{Keyed, Page, filter, paginate};

/// View state for one filterable, paginated listing.
///
/// Invariants held after every mutation:
/// - `filtered` is exactly `filter(all_items, query)`;
/// - `page` stays within `[1, total_pages()]`, clamped down when the
///   filtered set shrinks.
///
/// Items are replaced wholesale on every reload; there is no incremental
/// merging of partial updates.
#[derive(Debug)]
pub struct ListingState<T: Keyed + Clone> {
    all_items: Vec<T>,
    filtered: Vec<T>,
    query: String,
    page: usize,
    page_size: usize,
    pending_delete: Option<String>,
}

impl<T: Keyed + Clone> ListingState<T> {
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            all_items: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            page: 1,
            page_size,
            pending_delete: None,
        }
    }

    /// Wholesale reload: replace everything, re-apply the query, clamp the page.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.all_items = items;
        self.filtered = filter(&self.all_items, &self.query);
        self.clamp_page();
    }

    /// A query change always returns the user to the first page of results.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.filtered = filter(&self.all_items, &self.query);
        self.page = 1;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    /// Out-of-range targets clamp rather than error.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1).max(1));
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn current_page(&self) -> Page<'_, T> {
        paginate(&self.filtered, self.page_size, self.page)
    }

    pub fn filtered_items(&self) -> &[T] {
        &self.filtered
    }

    pub fn all_items(&self) -> &[T] {
        &self.all_items
    }

    /// Open the confirmation gate for `key`. A second request while the gate
    /// is already open replaces the pending key (last request wins).
    pub fn request_delete(&mut self, key: impl Into<String>) {
        self.pending_delete = Some(key.into());
    }

    /// Confirm: hand the pending key to the caller and close the gate. The
    /// gate closes regardless of how the delete call itself turns out.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Close the gate without any network call.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn awaiting_confirmation(&self) -> bool {
        self.pending_delete.is_some()
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        if self.page > total {
            self.page = total;
        }
        if self.page == 0 {
            self.page = 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/listing/state_tests.rs"]
mod tests;
