use anyhow::{Context, Result};

use cabinet::remote::{Gateway, Outcome};
use cabinet::store::SessionStore;

use crate::cli_runtime::require_session;
use crate::cli_subcommands::RemoteCommands;

use super::expect_ok;

pub(super) fn handle_login_command(
    store: &SessionStore,
    username: String,
    password: String,
) -> Result<()> {
    let cfg = store.read_config()?;
    let gateway = Gateway::new(cfg.base_url, None)?;
    let grant = expect_ok(gateway.login(&username, &password))?;
    store
        .set_session(&grant.access_token, &username)
        .context("persist session in state.json")?;
    println!("Logged in as {}", username);
    Ok(())
}

pub(super) fn handle_register_command(
    store: &SessionStore,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    let cfg = store.read_config()?;
    let gateway = Gateway::new(cfg.base_url, None)?;
    let grant = expect_ok(gateway.register(&username, &email, &password))?;
    store
        .set_session(&grant.access_token, &username)
        .context("persist session in state.json")?;
    println!("Registered and logged in as {}", username);
    Ok(())
}

/// Local state is cleared even when the backend refuses the call; a stale
/// cookie on disk is worse than a stale one server-side.
pub(super) fn handle_logout_command(store: &SessionStore) -> Result<()> {
    let remote_result = match crate::cli_runtime::open_gateway(store) {
        Ok(gateway) if gateway.has_session() => Some(gateway.logout()),
        _ => None,
    };

    store.clear_session().context("clear session state")?;

    if let Some(Outcome::Failed(msg)) = remote_result {
        eprintln!("warning: backend logout failed: {msg}");
    }
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(store: &SessionStore, json: bool) -> Result<()> {
    let gateway = require_session(store)?;
    let welcome = expect_ok(gateway.whoami())?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "message": welcome.message, "base_url": gateway.base_url() })
        );
    } else {
        println!("{}", welcome.message);
    }
    Ok(())
}

pub(super) fn handle_remote_command(store: &SessionStore, command: RemoteCommands) -> Result<()> {
    match command {
        RemoteCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
            } else {
                println!("url: {}", cfg.base_url);
            }
        }
        RemoteCommands::Set { url } => {
            let mut cfg = store.read_config()?;
            cfg.base_url = url;
            store.write_config(&cfg)?;
            println!("Backend configured");
        }
    }
    Ok(())
}
