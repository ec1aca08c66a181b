use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Named(String);

impl Keyed for Named {
    fn display_key(&self) -> &str {
        &self.0
    }
}

fn named(count: usize) -> Vec<Named> {
    (0..count).map(|i| Named(format!("item-{i:02}"))).collect()
}

#[test]
fn query_change_resets_to_first_page() {
    let mut listing = ListingState::new(10);
    listing.replace_items(named(25));
    listing.set_page(3);
    assert_eq!(listing.page(), 3);

    listing.set_query("item");
    assert_eq!(listing.page(), 1);
    assert_eq!(listing.filtered_items().len(), 25);
}

#[test]
fn shrinking_reload_clamps_the_page() {
    let mut listing = ListingState::new(10);
    listing.replace_items(named(25));
    listing.set_page(3);
    assert_eq!(listing.total_pages(), 3);
    assert_eq!(listing.current_page().items.len(), 5);

    // 24 items still need 3 pages; the page stays put.
    listing.replace_items(named(24));
    assert_eq!(listing.page(), 3);

    // 20 items need only 2; the page clamps down.
    listing.replace_items(named(20));
    assert_eq!(listing.page(), 2);
}

#[test]
fn reload_reapplies_the_active_query() {
    let mut listing = ListingState::new(10);
    listing.replace_items(vec![
        Named("alpha".into()),
        Named("beta".into()),
        Named("gamma".into()),
    ]);
    listing.set_query("a");
    assert_eq!(listing.filtered_items().len(), 3);

    listing.replace_items(vec![Named("beta".into()), Named("delta".into())]);
    assert_eq!(
        listing.filtered_items(),
        &[Named("beta".into()), Named("delta".into())]
    );
}

#[test]
fn set_page_clamps_out_of_range_targets() {
    let mut listing = ListingState::new(10);
    listing.replace_items(named(15));
    listing.set_page(99);
    assert_eq!(listing.page(), 2);
    listing.set_page(0);
    assert_eq!(listing.page(), 1);
}

#[test]
fn navigation_guards_at_the_boundaries() {
    let mut listing = ListingState::<Named>::new(10);
    // Empty listing: one page, both controls disabled.
    assert_eq!(listing.total_pages(), 1);
    assert!(!listing.has_prev());
    assert!(!listing.has_next());

    listing.replace_items(named(25));
    assert!(!listing.has_prev());
    assert!(listing.has_next());
    listing.set_page(3);
    assert!(listing.has_prev());
    assert!(!listing.has_next());
}

#[test]
fn pending_delete_gate_round_trip() {
    let mut listing = ListingState::new(10);
    listing.replace_items(named(3));
    assert!(!listing.awaiting_confirmation());

    listing.request_delete("item-00");
    assert!(listing.awaiting_confirmation());
    assert_eq!(listing.pending_delete(), Some("item-00"));

    // Cancel closes the gate without touching the items.
    listing.cancel_delete();
    assert!(!listing.awaiting_confirmation());
    assert_eq!(listing.all_items().len(), 3);

    // Confirm hands the key out exactly once.
    listing.request_delete("item-01");
    assert_eq!(listing.confirm_delete(), Some("item-01".to_string()));
    assert_eq!(listing.confirm_delete(), None);
    assert!(!listing.awaiting_confirmation());
}

#[test]
fn repeated_delete_requests_replace_the_pending_key() {
    let mut listing = ListingState::new(10);
    listing.replace_items(named(3));
    listing.request_delete("item-00");
    listing.request_delete("item-02");
    assert_eq!(listing.pending_delete(), Some("item-02"));
}

#[test]
fn reload_is_idempotent_without_mutations() {
    let mut listing = ListingState::new(10);
    listing.set_query("2");
    listing.replace_items(named(25));
    let first: Vec<Named> = listing.filtered_items().to_vec();
    listing.replace_items(named(25));
    assert_eq!(listing.filtered_items(), first.as_slice());
}
