//! Local persistence of the client configuration and the captured session
//! cookie: `config.json` and `state.json` inside a profile directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::{ClientConfig, SessionState};

/// Overrides the profile directory (used by tests and scripted setups).
pub const CONFIG_DIR_ENV: &str = "CABINET_CONFIG_DIR";

pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn open() -> Result<Self> {
        let root = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .context("locate user config directory")?
                .join("cabinet"),
        };
        Self::open_at(root)
    }

    pub fn open_at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("create profile directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        serde_json::from_slice(&bytes).context("parse config.json")
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")
    }

    pub fn read_state(&self) -> Result<SessionState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(SessionState {
                version: 1,
                ..SessionState::default()
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        serde_json::from_slice(&bytes).context("parse state.json")
    }

    pub fn write_state(&self, state: &SessionState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(state).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")
    }

    pub fn session_token(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.access_token)
    }

    pub fn set_session(&self, access_token: &str, username: &str) -> Result<()> {
        let mut state = self.read_state()?;
        state.access_token = Some(access_token.to_string());
        state.username = Some(username.to_string());
        state.logged_in_at = Some(now_rfc3339()?);
        self.write_state(&state)
    }

    pub fn clear_session(&self) -> Result<()> {
        let mut state = self.read_state()?;
        state.access_token = None;
        state.username = None;
        state.logged_in_at = None;
        self.write_state(&state)
    }
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format timestamp")
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
