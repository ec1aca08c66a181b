use std::path::PathBuf;

use anyhow::{Context, Result};

use cabinet::listing::ListingState;
use cabinet::model::{PREVIEWABLE_EXTENSIONS, previewable};
use cabinet::store::SessionStore;

use crate::cli_runtime::require_session;

use super::{FILE_PAGE_SIZE, confirm, expect_ok};

pub(super) fn handle_files_command(
    store: &SessionStore,
    folder: String,
    query: Option<String>,
    page: usize,
    json: bool,
) -> Result<()> {
    let gateway = require_session(store)?;
    let files = expect_ok(gateway.list_files(&folder))?;

    let mut listing = ListingState::new(FILE_PAGE_SIZE);
    listing.replace_items(files);
    if let Some(query) = query {
        listing.set_query(query);
    }
    listing.set_page(page);

    let view = listing.current_page();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(view.items).context("serialize files json")?
        );
        return Ok(());
    }

    for file in view.items {
        println!("r{:<4} {}", file.revision, file.filename);
    }
    if view.items.is_empty() {
        println!("(no files)");
    }
    println!(
        "page {} of {} ({} files in '{}')",
        listing.page(),
        listing.total_pages(),
        listing.filtered_items().len(),
        folder
    );
    Ok(())
}

pub(super) fn handle_upload_command(
    store: &SessionStore,
    folder: String,
    files: Vec<PathBuf>,
) -> Result<()> {
    let gateway = require_session(store)?;

    // The batch ends with exactly one wholesale reload, even after
    // partial failures.
    let batch = gateway.upload_batch(&folder, &files);
    for (name, outcome) in &batch.results {
        if outcome.is_ok() {
            println!("uploaded {}", name);
        }
    }
    let failures = batch.failure_lines();
    for line in &failures {
        eprintln!("{}", line);
    }

    let listing = expect_ok(batch.reloaded)?;
    println!("{} files now in '{}'", listing.len(), folder);

    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} uploads failed",
            failures.len(),
            batch.results.len()
        );
    }
    Ok(())
}

pub(super) fn handle_delete_file_command(
    store: &SessionStore,
    folder: String,
    filename: String,
    yes: bool,
) -> Result<()> {
    if !yes && !confirm(&format!("Delete '{}' from '{}'?", filename, folder))? {
        println!("Aborted");
        return Ok(());
    }

    let gateway = require_session(store)?;
    expect_ok(gateway.delete_file(&folder, &filename))?;
    println!("'{}' deleted", filename);
    Ok(())
}

pub(super) fn handle_download_command(
    store: &SessionStore,
    folder: String,
    filename: String,
    out: Option<PathBuf>,
) -> Result<()> {
    let gateway = require_session(store)?;
    let dest = out.unwrap_or_else(|| PathBuf::from(&filename));
    let bytes = expect_ok(gateway.download_file(&folder, &filename, &dest))?;
    println!("Saved {} ({} bytes)", dest.display(), bytes);
    Ok(())
}

pub(super) fn handle_preview_command(
    store: &SessionStore,
    folder: String,
    filename: String,
    revision: i64,
) -> Result<()> {
    if !previewable(&filename) {
        anyhow::bail!(
            "'{}' is not previewable (supported: {})",
            filename,
            PREVIEWABLE_EXTENSIONS.join(", ")
        );
    }

    let gateway = require_session(store)?;
    expect_ok(gateway.probe_file(&folder, &filename, revision))?;
    println!("{}", gateway.preview_url(&folder, &filename, revision));
    Ok(())
}
