use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Named(&'static str);

impl Keyed for Named {
    fn display_key(&self) -> &str {
        self.0
    }
}

#[test]
fn empty_query_returns_full_copy_in_order() {
    let items = vec![Named("b"), Named("a"), Named("c")];
    let out = filter(&items, "");
    assert_eq!(out, items);
}

#[test]
fn matches_case_insensitively_and_preserves_order() {
    let items = vec![
        Named("Report.pdf"),
        Named("image.png"),
        Named("old_report_final.md"),
    ];
    let out = filter(&items, "report");
    assert_eq!(out, vec![Named("Report.pdf"), Named("old_report_final.md")]);
}

#[test]
fn uppercase_query_matches_lowercase_keys() {
    let items = vec![Named("notes.txt"), Named("misc")];
    let out = filter(&items, "NOTES");
    assert_eq!(out, vec![Named("notes.txt")]);
}

#[test]
fn no_match_yields_empty() {
    let items = vec![Named("a"), Named("b")];
    assert!(filter(&items, "zzz").is_empty());
}

#[test]
fn empty_input_stays_empty() {
    let items: Vec<Named> = Vec::new();
    assert!(filter(&items, "anything").is_empty());
    assert!(filter(&items, "").is_empty());
}
