//! Blocking HTTP gateway for the storage backend.
//!
//! Every response is interpreted in one place into a tagged [`Outcome`];
//! callers never branch on raw status codes.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

mod encode;
mod files;
mod folders;
mod session;
mod types;

pub use encode::{encode_filename, encode_folder_path};
pub use files::UploadBatch;
pub use types::{ServerMessage, SessionGrant, Welcome};

use types::ErrorBody;

/// Interpreted result of one backend call.
///
/// `Unauthenticated` (401) and `Forbidden` (403) are navigation signals,
/// never inline errors; anything else that is not 2xx, including transport
/// failures, collapses into `Failed` with a user-facing message.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    Ok(T),
    Unauthenticated,
    Forbidden,
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}

pub struct Gateway {
    base_url: String,
    session: Option<String>,
    client: reqwest::blocking::Client,
}

impl Gateway {
    /// `session` is the captured `access_token` cookie value, if any.
    pub fn new(base_url: impl Into<String>, session: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("cabinet")
            .build()
            .context("build reqwest client")?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            base_url,
            session,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Session credentials travel implicitly as a cookie, never in bodies.
    fn request(&self, method: Method, path: &str) -> reqwest::blocking::RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(token) = &self.session {
            req = req.header(reqwest::header::COOKIE, format!("access_token={token}"));
        }
        req
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, label: &str) -> Outcome<T> {
        match self.request(Method::GET, path).send() {
            Ok(resp) => interpret(resp, label),
            Err(err) => Outcome::Failed(format!("{label}: {err}")),
        }
    }
}

/// Central status interpretation (the only place 401/403 are looked at).
fn interpret<T: DeserializeOwned>(resp: reqwest::blocking::Response, label: &str) -> Outcome<T> {
    match tag_status(resp.status()) {
        StatusTag::Unauthenticated => Outcome::Unauthenticated,
        StatusTag::Forbidden => Outcome::Forbidden,
        StatusTag::Failure => Outcome::Failed(failure_message(resp, label)),
        StatusTag::Success => match resp.json::<T>() {
            Ok(v) => Outcome::Ok(v),
            Err(err) => Outcome::Failed(format!("{label}: invalid response body ({err})")),
        },
    }
}

/// Like [`interpret`] but for endpoints whose success body is irrelevant.
fn interpret_unit(resp: reqwest::blocking::Response, label: &str) -> Outcome<()> {
    match tag_status(resp.status()) {
        StatusTag::Unauthenticated => Outcome::Unauthenticated,
        StatusTag::Forbidden => Outcome::Forbidden,
        StatusTag::Failure => Outcome::Failed(failure_message(resp, label)),
        StatusTag::Success => Outcome::Ok(()),
    }
}

enum StatusTag {
    Success,
    Unauthenticated,
    Forbidden,
    Failure,
}

fn tag_status(status: StatusCode) -> StatusTag {
    if status == StatusCode::UNAUTHORIZED {
        StatusTag::Unauthenticated
    } else if status == StatusCode::FORBIDDEN {
        StatusTag::Forbidden
    } else if status.is_success() {
        StatusTag::Success
    } else {
        StatusTag::Failure
    }
}

/// Prefer the backend's `detail` message, fall back to a generic line.
fn failure_message(resp: reqwest::blocking::Response, label: &str) -> String {
    let status = resp.status();
    match resp.json::<ErrorBody>() {
        Ok(ErrorBody {
            detail: Some(detail),
        }) if !detail.is_empty() => detail,
        _ => format!("{label} failed (HTTP {status})"),
    }
}
