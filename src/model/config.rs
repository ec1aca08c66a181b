use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    /// Base URL of the storage backend, without a trailing slash.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Session credentials live in state.json, not config.json, so that
/// `logout` never has to rewrite the configured base URL.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,

    /// Value of the backend's `access_token` session cookie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<String>,
}
