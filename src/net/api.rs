//! REST API helpers for the authentication backend.
//!
//! Browser builds (wasm32): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, so the crate compiles and its
//! tests run off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! login degrades to an on-page message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

/// Login endpoint; resolved against the origin the app is served from.
#[cfg(any(test, target_arch = "wasm32"))]
const AUTH_LOGIN_ENDPOINT: &str = "/api/auth/login";

#[cfg(any(test, target_arch = "wasm32"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Successful authentication response from the backend.
///
/// `user_role` arrives as the backend's raw role string and is parsed into
/// a [`crate::state::session::Role`] by the caller.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AuthPayload {
    pub session_id: String,
    pub login_name: String,
    pub full_name: String,
    pub description: String,
    pub user_role: String,
}

/// Exchange a matric number and password for a session.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the backend responds
/// with a non-OK status, or the response body cannot be parsed.
pub async fn authenticate(matric_no: &str, password: &str) -> Result<AuthPayload, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "login": matric_no, "password": password });
        let resp = gloo_net::http::Request::post(AUTH_LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<AuthPayload>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (matric_no, password);
        Err("not available outside the browser".to_owned())
    }
}
