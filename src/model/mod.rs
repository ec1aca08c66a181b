mod config;
mod items;

pub use config::{ClientConfig, DEFAULT_BASE_URL, SessionState};
pub use items::{FileEntry, Folder, PREVIEWABLE_EXTENSIONS, previewable};
