use serde::{Deserialize, Serialize};

use crate::listing::Keyed;

/// A folder as reported by `GET /folders/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,

    /// Display key: may contain `/` separators; also the identity the
    /// delete/list endpoints address the folder by.
    pub path: String,
}

/// A file within a folder as reported by `GET /folders/{path}/files/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub filename: String,

    /// Opaque version marker; threaded into the preview probe query string
    /// so the backend can bust caches.
    #[serde(default)]
    pub revision: i64,
}

impl Keyed for Folder {
    fn display_key(&self) -> &str {
        &self.path
    }
}

impl Keyed for FileEntry {
    fn display_key(&self) -> &str {
        &self.filename
    }
}

/// Extensions the preview flow is allowed to open, matched case-insensitively.
pub const PREVIEWABLE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "pdf", "txt", "md"];

pub fn previewable(filename: &str) -> bool {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_lowercase();
    PREVIEWABLE_EXTENSIONS.iter().any(|e| *e == ext)
}

#[cfg(test)]
#[path = "../tests/model/items_tests.rs"]
mod tests;
