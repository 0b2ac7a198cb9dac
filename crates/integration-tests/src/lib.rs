//! Integration tests for Lunchbox.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations, then start the server
//! cargo run -p lunchbox-cli -- migrate
//! cargo run -p lunchbox-server
//!
//! # Run the integration tests against it
//! LUNCHBOX_ADMIN_PASSWORD=... cargo test -p lunchbox-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a running server over HTTP and are `#[ignore]`d by
//! default so a plain `cargo test` stays self-contained. Every test
//! works with uniquely named colleagues and sandwiches, so the suite
//! can run against a database that already has data in it.

use reqwest::{Client, Response, redirect};
use uuid::Uuid;

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("LUNCHBOX_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Bootstrap admin name (matches the server's default).
#[must_use]
pub fn admin_name() -> String {
    std::env::var("LUNCHBOX_ADMIN_NAME").unwrap_or_else(|_| "admin".to_string())
}

/// Bootstrap admin password.
///
/// # Panics
///
/// Panics if `LUNCHBOX_ADMIN_PASSWORD` is not set; the suite cannot log
/// in without it.
#[must_use]
pub fn admin_password() -> String {
    std::env::var("LUNCHBOX_ADMIN_PASSWORD")
        .expect("LUNCHBOX_ADMIN_PASSWORD must be set for integration tests")
}

/// Create a client with a cookie store and redirects disabled.
///
/// Redirects stay visible to the tests, which assert on Location.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a unique name so tests do not collide.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    format!("{prefix}-{id}")
}

/// The Location header of a redirect response, or empty.
#[must_use]
pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Log in and return the raw (redirect) response.
///
/// # Panics
///
/// Panics if the request cannot be sent.
pub async fn login(client: &Client, name: &str, password: &str) -> Response {
    client
        .post(format!("{}/login", base_url()))
        .form(&[("name", name), ("password", password)])
        .send()
        .await
        .expect("Failed to send login request")
}

/// Log in and assert it succeeded.
///
/// # Panics
///
/// Panics if the server does not redirect to the order page.
pub async fn login_ok(client: &Client, name: &str, password: &str) {
    let resp = login(client, name, password).await;
    let target = location(&resp);
    assert!(
        resp.status().is_redirection() && target.starts_with("/order"),
        "login as {name} failed, redirected to {target:?}"
    );
}

/// Submit an admin action form and return the raw response.
///
/// # Panics
///
/// Panics if the request cannot be sent.
pub async fn post_admin_action(client: &Client, fields: &[(&str, &str)]) -> Response {
    client
        .post(format!("{}/admin", base_url()))
        .form(fields)
        .send()
        .await
        .expect("Failed to send admin action")
}

/// Fetch a page and return its body.
///
/// # Panics
///
/// Panics if the request fails or the body cannot be read.
pub async fn get_body(client: &Client, path: &str) -> String {
    client
        .get(format!("{}{path}", base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read response body")
}
