/// One page of a listing plus the page count the controls render.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Always at least 1, so controls never show "page 0 of 0".
    pub total_pages: usize,
}

/// Slice `items` into the 1-based `current_page` of `page_size` entries.
///
/// An out-of-range page yields an empty slice, never an error.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> Page<'_, T> {
    debug_assert!(page_size > 0);
    let total_pages = items.len().div_ceil(page_size).max(1);

    if current_page == 0 {
        return Page {
            items: &[],
            total_pages,
        };
    }
    let start = (current_page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    let slice = if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    };
    Page {
        items: slice,
        total_pages,
    }
}

#[cfg(test)]
#[path = "../tests/listing/page_tests.rs"]
mod tests;
