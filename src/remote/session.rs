//! Session establishment and teardown.
//!
//! Login/register are the one place 401 does NOT mean "redirect": there it
//! means bad credentials, so every non-2xx surfaces as `Failed(detail)`.

use reqwest::Method;
use serde_json::json;

use super::{Gateway, Outcome, ServerMessage, SessionGrant, Welcome, failure_message, interpret};

impl Gateway {
    pub fn login(&self, username: &str, password: &str) -> Outcome<SessionGrant> {
        self.credential_call(
            "/login/",
            json!({ "username": username, "password": password }),
            "login",
        )
    }

    pub fn register(&self, username: &str, email: &str, password: &str) -> Outcome<SessionGrant> {
        self.credential_call(
            "/register/",
            json!({ "username": username, "email": email, "password": password }),
            "register",
        )
    }

    pub fn logout(&self) -> Outcome<ServerMessage> {
        match self.request(Method::POST, "/logout/").send() {
            Ok(resp) => interpret(resp, "logout"),
            Err(err) => Outcome::Failed(format!("logout: {err}")),
        }
    }

    /// Session validity probe.
    pub fn whoami(&self) -> Outcome<Welcome> {
        self.get_json("/home/", "session check")
    }

    fn credential_call(
        &self,
        path: &str,
        body: serde_json::Value,
        label: &str,
    ) -> Outcome<SessionGrant> {
        let resp = match self.request(Method::POST, path).json(&body).send() {
            Ok(resp) => resp,
            Err(err) => return Outcome::Failed(format!("{label}: {err}")),
        };
        if !resp.status().is_success() {
            return Outcome::Failed(failure_message(resp, label));
        }
        match session_cookie(&resp) {
            Some(access_token) => Outcome::Ok(SessionGrant { access_token }),
            None => Outcome::Failed(format!("{label}: backend did not set a session cookie")),
        }
    }
}

/// Pull the `access_token` value out of the response's `Set-Cookie` headers.
fn session_cookie(resp: &reqwest::blocking::Response) -> Option<String> {
    for value in resp.headers().get_all(reqwest::header::SET_COOKIE) {
        let Ok(raw) = value.to_str() else {
            continue;
        };
        let Some(rest) = raw.strip_prefix("access_token=") else {
            continue;
        };
        let token = rest.split(';').next().unwrap_or(rest).trim();
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }
    None
}
