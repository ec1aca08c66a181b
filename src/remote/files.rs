//! File operations within a folder: list, upload, delete, preview probe,
//! download.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Method;
use reqwest::blocking::multipart;

use super::{
    Gateway, Outcome, ServerMessage, encode_filename, encode_folder_path, interpret,
    interpret_unit,
};
use crate::model::FileEntry;

/// Result of one upload batch: per-file outcomes plus the single listing
/// reload issued after the whole batch joined.
pub struct UploadBatch {
    pub results: Vec<(String, Outcome<ServerMessage>)>,
    pub reloaded: Outcome<Vec<FileEntry>>,
}

impl UploadBatch {
    /// One line per failed upload, in batch order.
    pub fn failure_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                Outcome::Ok(_) => None,
                Outcome::Unauthenticated => Some(format!("{name}: session expired")),
                Outcome::Forbidden => Some(format!("{name}: access denied")),
                Outcome::Failed(msg) => Some(format!("{name}: {msg}")),
            })
            .collect()
    }

    /// True when any upload in the batch bounced off an expired session.
    pub fn expired(&self) -> bool {
        self.results
            .iter()
            .any(|(_, outcome)| matches!(outcome, Outcome::Unauthenticated))
    }
}

impl Gateway {
    pub fn list_files(&self, folder: &str) -> Outcome<Vec<FileEntry>> {
        let path = format!("/folders/{}/files/", encode_folder_path(folder));
        self.get_json(&path, "list files")
    }

    /// Upload one local file into `folder` (one request per file).
    pub fn upload_file(&self, folder: &str, file: &Path) -> Outcome<ServerMessage> {
        let form = match multipart::Form::new().file("file", file) {
            Ok(form) => form,
            Err(err) => return Outcome::Failed(format!("read {}: {err}", file.display())),
        };
        let path = format!("/upload/{}", encode_folder_path(folder));
        let resp = match self.request(Method::POST, &path).multipart(form).send() {
            Ok(resp) => resp,
            Err(err) => return Outcome::Failed(format!("upload: {err}")),
        };
        interpret(resp, "upload")
    }

    /// Fan out one independent upload per file and join them all before
    /// returning, pairing each result with the file's display name. A failed
    /// upload never blocks or rolls back the others; the caller reloads the
    /// listing exactly once afterwards.
    pub fn upload_many(
        &self,
        folder: &str,
        files: &[PathBuf],
    ) -> Vec<(String, Outcome<ServerMessage>)> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = files
                .iter()
                .map(|path| {
                    let name = file_label(path);
                    (name, scope.spawn(move || self.upload_file(folder, path)))
                })
                .collect();

            handles
                .into_iter()
                .map(|(name, handle)| {
                    let outcome = handle
                        .join()
                        .unwrap_or_else(|_| Outcome::Failed("upload worker panicked".to_string()));
                    (name, outcome)
                })
                .collect()
        })
    }

    /// Upload the whole batch, then reload the listing exactly once,
    /// regardless of partial failures.
    pub fn upload_batch(&self, folder: &str, files: &[PathBuf]) -> UploadBatch {
        let results = self.upload_many(folder, files);
        let reloaded = self.list_files(folder);
        UploadBatch { results, reloaded }
    }

    pub fn delete_file(&self, folder: &str, filename: &str) -> Outcome<ServerMessage> {
        let path = format!(
            "/delete_file/{}/{}",
            encode_folder_path(folder),
            encode_filename(filename)
        );
        match self.request(Method::DELETE, &path).send() {
            Ok(resp) => interpret(resp, "delete file"),
            Err(err) => Outcome::Failed(format!("delete file: {err}")),
        }
    }

    /// Lightweight existence/permission check issued before opening a
    /// preview, so auth failures surface as a redirect instead of a broken
    /// viewer.
    pub fn probe_file(&self, folder: &str, filename: &str, revision: i64) -> Outcome<()> {
        let path = self.preview_path(folder, filename, revision);
        match self.request(Method::GET, &path).send() {
            Ok(resp) => interpret_unit(resp, "preview check"),
            Err(err) => Outcome::Failed(format!("preview check: {err}")),
        }
    }

    /// Full URL of the previewable resource (what a viewer would open).
    pub fn preview_url(&self, folder: &str, filename: &str, revision: i64) -> String {
        self.url(&self.preview_path(folder, filename, revision))
    }

    /// Download the file as opaque bytes and save it under `dest`.
    /// Returns the number of bytes written.
    pub fn download_file(&self, folder: &str, filename: &str, dest: &Path) -> Outcome<u64> {
        let path = format!(
            "/download/{}/{}",
            encode_folder_path(folder),
            encode_filename(filename)
        );
        let resp = match self.request(Method::GET, &path).send() {
            Ok(resp) => resp,
            Err(err) => return Outcome::Failed(format!("download: {err}")),
        };
        match super::tag_status(resp.status()) {
            super::StatusTag::Unauthenticated => return Outcome::Unauthenticated,
            super::StatusTag::Forbidden => return Outcome::Forbidden,
            super::StatusTag::Failure => {
                return Outcome::Failed(super::failure_message(resp, "download"));
            }
            super::StatusTag::Success => {}
        }
        let bytes = match resp.bytes() {
            Ok(bytes) => bytes,
            Err(err) => return Outcome::Failed(format!("download: read body: {err}")),
        };
        match fs::write(dest, &bytes) {
            Ok(()) => Outcome::Ok(bytes.len() as u64),
            Err(err) => Outcome::Failed(format!("write {}: {err}", dest.display())),
        }
    }

    fn preview_path(&self, folder: &str, filename: &str, revision: i64) -> String {
        format!(
            "/folders/{}/{}?revision={revision}",
            encode_folder_path(folder),
            encode_filename(filename)
        )
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
