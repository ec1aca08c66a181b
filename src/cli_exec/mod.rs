use std::io::Write;

use anyhow::Result;

use cabinet::remote::Outcome;
use cabinet::store::SessionStore;

use crate::cli_subcommands::Commands;

mod dispatch;
mod files;
mod folders;
mod session;

pub(crate) const FOLDER_PAGE_SIZE: usize = 10;
pub(crate) const FILE_PAGE_SIZE: usize = 7;

pub(crate) fn handle_command(command: Commands) -> Result<()> {
    dispatch::handle_command(command)
}

fn with_store<T>(f: impl FnOnce(&SessionStore) -> Result<T>) -> Result<T> {
    let store = SessionStore::open()?;
    f(&store)
}

/// Uniform mapping of gateway outcomes to process-level errors.
fn expect_ok<T>(outcome: Outcome<T>) -> Result<T> {
    match outcome {
        Outcome::Ok(v) => Ok(v),
        Outcome::Unauthenticated => anyhow::bail!(
            "session expired or missing (run `cabinet login --username ... --password ...`)"
        ),
        Outcome::Forbidden => {
            anyhow::bail!("access denied (this folder belongs to another account)")
        }
        Outcome::Failed(msg) => anyhow::bail!(msg),
    }
}

/// Interactive rendering of the two-phase delete gate.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|err| anyhow::anyhow!("read confirmation: {err}"))?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
