//! DTOs for backend request/response payloads.

use serde::Deserialize;

/// Generic `{"message": ...}` acknowledgement body.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: String,
}

/// Body of `GET /home/`, the session validity probe.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct Welcome {
    #[serde(default)]
    pub message: String,
}

/// Session cookie captured from a successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionGrant {
    pub access_token: String,
}

/// Error body shape used by the backend: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub(super) detail: Option<String>,
}
