/// Percent-encode a folder path segment by segment, preserving the `/`
/// separators so the backend sees the same hierarchy.
pub fn encode_folder_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode a filename as a whole; a `/` inside a filename is data,
/// not a separator.
pub fn encode_filename(filename: &str) -> String {
    urlencoding::encode(filename).into_owned()
}

#[cfg(test)]
#[path = "../tests/remote/encode_tests.rs"]
mod tests;
