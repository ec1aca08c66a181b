use super::*;

#[test]
fn empty_list_still_reports_one_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 10, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn out_of_range_page_yields_empty_slice() {
    let items: Vec<u32> = (0..5).collect();
    let page = paginate(&items, 10, 2);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);

    // Page 0 is below the valid range; it must not panic either.
    let page = paginate(&items, 10, 0);
    assert!(page.items.is_empty());
}

#[test]
fn last_page_holds_the_remainder() {
    let items: Vec<u32> = (0..25).collect();
    let page = paginate(&items, 10, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items, &[20, 21, 22, 23, 24]);
}

#[test]
fn exact_multiple_has_no_trailing_page() {
    let items: Vec<u32> = (0..20).collect();
    assert_eq!(paginate(&items, 10, 1).total_pages, 2);
    assert_eq!(paginate(&items, 10, 2).items.len(), 10);
    assert!(paginate(&items, 10, 3).items.is_empty());
}

#[test]
fn first_page_is_a_prefix() {
    let items: Vec<u32> = (0..9).collect();
    let page = paginate(&items, 4, 1);
    assert_eq!(page.items, &[0, 1, 2, 3]);
    assert_eq!(page.total_pages, 3);
}
