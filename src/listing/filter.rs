use super::Keyed;

/// Case-insensitive substring filter over display keys, preserving order.
///
/// An empty query returns a full copy of the input.
pub fn filter<T: Keyed + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.display_key().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "../tests/listing/filter_tests.rs"]
mod tests;
