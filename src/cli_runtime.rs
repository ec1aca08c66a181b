use anyhow::{Context, Result};
use clap::Parser;

use cabinet::remote::Gateway;
use cabinet::store::SessionStore;

use crate::cli_subcommands::Commands;

#[derive(Parser)]
#[command(name = "cabinet")]
#[command(about = "Console client for the cabinet folder/file backend", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => cabinet::tui::run(),
        Some(command) => crate::cli_exec::handle_command(command),
    }
}

/// Gateway with whatever session is stored (possibly none).
pub(crate) fn open_gateway(store: &SessionStore) -> Result<Gateway> {
    let cfg = store.read_config()?;
    let token = store.session_token()?;
    Gateway::new(cfg.base_url, token)
}

/// Gateway that must carry a session; refuses early when none is stored.
pub(crate) fn require_session(store: &SessionStore) -> Result<Gateway> {
    let cfg = store.read_config()?;
    let token = store
        .session_token()?
        .context("not logged in (run `cabinet login --username ... --password ...`)")?;
    Gateway::new(cfg.base_url, Some(token))
}
