//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and attaching the
//! session to requests.

use contracts::system::auth::Session;
use gloo_net::http::RequestBuilder;

/// Port the profile backend listens on, relative to the page host
const BACKEND_PORT: u16 = 8080;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/uploads");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of one artist's profile resource
pub fn profile_path(id: &str) -> String {
    format!("/api/artists/{}/profile", urlencoding::encode(id))
}

/// Attach the bearer token of the session, if any
pub fn with_auth(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.bearer_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}
