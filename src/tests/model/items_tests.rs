use super::*;

#[test]
fn allow_list_matches_case_insensitively() {
    assert!(previewable("photo.JPG"));
    assert!(previewable("notes.md"));
    assert!(previewable("scan.pdf"));
}

#[test]
fn unsupported_extensions_are_refused() {
    assert!(!previewable("archive.zip"));
    assert!(!previewable("binary.exe"));
}

#[test]
fn names_without_extensions_are_refused() {
    assert!(!previewable("README"));
    assert!(!previewable(""));
}

#[test]
fn only_the_last_extension_counts() {
    assert!(previewable("backup.zip.txt"));
    assert!(!previewable("notes.txt.zip"));
}
