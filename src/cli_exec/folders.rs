use std::path::PathBuf;

use anyhow::{Context, Result};

use cabinet::listing::ListingState;
use cabinet::store::SessionStore;

use crate::cli_runtime::require_session;

use super::{FOLDER_PAGE_SIZE, confirm, expect_ok};

pub(super) fn handle_folders_command(
    store: &SessionStore,
    query: Option<String>,
    page: usize,
    json: bool,
) -> Result<()> {
    let gateway = require_session(store)?;
    let folders = expect_ok(gateway.list_folders())?;

    let mut listing = ListingState::new(FOLDER_PAGE_SIZE);
    listing.replace_items(folders);
    if let Some(query) = query {
        listing.set_query(query);
    }
    listing.set_page(page);

    let view = listing.current_page();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(view.items).context("serialize folders json")?
        );
        return Ok(());
    }

    for folder in view.items {
        println!("{:>6}  {}", folder.id, folder.path);
    }
    if view.items.is_empty() {
        println!("(no folders)");
    }
    println!(
        "page {} of {} ({} folders)",
        listing.page(),
        listing.total_pages(),
        listing.filtered_items().len()
    );
    Ok(())
}

pub(super) fn handle_create_folder_command(
    store: &SessionStore,
    name: String,
    files: Vec<PathBuf>,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        // Local validation: the gateway is never called.
        anyhow::bail!("folder name must not be empty");
    }

    let gateway = require_session(store)?;
    let ack = expect_ok(gateway.create_folder(name, &files))?;
    if ack.message.is_empty() {
        println!("Folder '{}' created", name);
    } else {
        println!("{}", ack.message);
    }
    Ok(())
}

pub(super) fn handle_delete_folder_command(
    store: &SessionStore,
    path: String,
    yes: bool,
) -> Result<()> {
    if !yes && !confirm(&format!("Delete folder '{}'?", path))? {
        println!("Aborted");
        return Ok(());
    }

    let gateway = require_session(store)?;
    expect_ok(gateway.delete_folder(&path))?;
    println!("Folder '{}' deleted", path);
    Ok(())
}
