//! Integration tests for the login and logout flow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p lunchbox-server)
//! - `LUNCHBOX_ADMIN_PASSWORD` set to the bootstrap admin password
//!
//! Run with: cargo test -p lunchbox-integration-tests -- --ignored

use reqwest::StatusCode;

use lunchbox_integration_tests::{
    admin_name, admin_password, base_url, client, get_body, location, login, login_ok,
    post_admin_action, unique_name,
};

// ============================================================================
// Health Checks
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Anonymous Access
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_root_redirects_anonymous_to_login() {
    let client = client();

    let resp = client
        .get(base_url())
        .send()
        .await
        .expect("Failed to reach root");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_protected_pages_redirect_anonymous() {
    let client = client();
    let base_url = base_url();

    for path in ["/order", "/details", "/admin"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "for {path}");
        assert_eq!(location(&resp), "/login", "for {path}");
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_page_renders() {
    let client = client();
    let body = get_body(&client, "/login").await;

    assert!(body.contains("Log in"));
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("name=\"password\""));
}

// ============================================================================
// Login / Logout
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_login_and_logout() {
    let client = client();
    let base_url = base_url();

    let resp = login(&client, &admin_name(), &admin_password()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/order?notice=logged_in_admin");

    // The session cookie now grants access to the order page
    let body = get_body(&client, "/order").await;
    assert!(body.contains("Place an order"));

    let resp = client
        .get(format!("{base_url}/logout"))
        .send()
        .await
        .expect("Failed to send logout");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login?notice=logged_out");

    // The session is gone
    let resp = client
        .get(format!("{base_url}/order"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_login_rejects_wrong_password() {
    let client = client();

    let resp = login(&client, &admin_name(), "definitely-wrong-password").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login?error=invalid_credentials");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_rejects_unknown_name() {
    let client = client();

    let resp = login(&client, &unique_name("nobody"), "anything").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login?error=invalid_credentials");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_regular_colleague_logs_in_by_name_alone() {
    let admin = client();
    login_ok(&admin, &admin_name(), &admin_password()).await;

    // Create a colleague with a known password
    let name = unique_name("casual");
    let resp = post_admin_action(
        &admin,
        &[
            ("action", "add_colleague"),
            ("colleague_name", &name),
            ("colleague_password", "some-password"),
        ],
    )
    .await;
    assert_eq!(location(&resp), "/admin?notice=colleague_added");

    // The submitted password is not checked for regular colleagues
    let colleague = client();
    let resp = login(&colleague, &name, "a-completely-different-password").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/order?notice=logged_in");
}
