//! Folder CRUD against the backend.

use std::path::Path;

use reqwest::Method;
use reqwest::blocking::multipart;

use super::{Gateway, Outcome, ServerMessage, encode_folder_path, interpret};
use crate::model::Folder;

impl Gateway {
    pub fn list_folders(&self) -> Outcome<Vec<Folder>> {
        self.get_json("/folders/", "list folders")
    }

    /// Create a folder, optionally seeding it with local files (one
    /// multipart request carrying the name and every attachment).
    ///
    /// Callers reject an empty name before reaching here; the gateway does
    /// not re-validate it.
    pub fn create_folder<P: AsRef<Path>>(&self, name: &str, files: &[P]) -> Outcome<ServerMessage> {
        let mut form = multipart::Form::new().text("folder_path", name.to_string());
        for path in files {
            let path = path.as_ref();
            form = match form.file("files", path) {
                Ok(form) => form,
                Err(err) => {
                    return Outcome::Failed(format!("read {}: {err}", path.display()));
                }
            };
        }

        let resp = match self
            .request(Method::POST, "/create_folder/")
            .multipart(form)
            .send()
        {
            Ok(resp) => resp,
            Err(err) => return Outcome::Failed(format!("create folder: {err}")),
        };
        interpret(resp, "create folder")
    }

    pub fn delete_folder(&self, path: &str) -> Outcome<ServerMessage> {
        let url = format!("/delete_folder/{}", encode_folder_path(path));
        match self.request(Method::DELETE, &url).send() {
            Ok(resp) => interpret(resp, "delete folder"),
            Err(err) => Outcome::Failed(format!("delete folder: {err}")),
        }
    }
}
