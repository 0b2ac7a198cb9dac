//! Integration tests for placing orders into the shared cart.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p lunchbox-server)
//! - `LUNCHBOX_ADMIN_PASSWORD` set to the bootstrap admin password
//!
//! Run with: cargo test -p lunchbox-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

use lunchbox_integration_tests::{
    admin_name, admin_password, base_url, client, get_body, location, login_ok,
    post_admin_action, unique_name,
};

/// Create a colleague and a sandwich to order, returning their names.
async fn setup_colleague_and_sandwich(admin: &Client, price: &str) -> (String, String) {
    let colleague = unique_name("eater");
    let resp = post_admin_action(
        admin,
        &[
            ("action", "add_colleague"),
            ("colleague_name", &colleague),
            ("colleague_password", "lunch"),
        ],
    )
    .await;
    assert_eq!(location(&resp), "/admin?notice=colleague_added");

    let sandwich = unique_name("blt");
    let resp = post_admin_action(
        admin,
        &[
            ("action", "add_sandwich"),
            ("sandwich_name", &sandwich),
            ("sandwich_price", price),
        ],
    )
    .await;
    assert_eq!(location(&resp), "/admin?notice=sandwich_added");

    (colleague, sandwich)
}

/// Place an order and return the redirect response.
async fn place_order(client: &Client, fields: &[(&str, &str)]) -> reqwest::Response {
    client
        .post(format!("{}/order", base_url()))
        .form(fields)
        .send()
        .await
        .expect("Failed to send order")
}

// ============================================================================
// Placing Orders
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_colleague_places_order_and_sees_it_everywhere() {
    let admin = client();
    login_ok(&admin, &admin_name(), &admin_password()).await;
    let (colleague, sandwich) = setup_colleague_and_sandwich(&admin, "4.50").await;

    let me = client();
    login_ok(&me, &colleague, "").await;

    let resp = place_order(&me, &[("sandwich_name", &sandwich), ("quantity", "2")]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/order?notice=order_placed");

    // Kitchen totals on the order page
    let body = get_body(&me, "/order").await;
    assert!(body.contains(&sandwich));

    // Per-colleague breakdown with the line total (2 x 4.50)
    let body = get_body(&me, "/details").await;
    assert!(body.contains(&colleague));
    assert!(body.contains(&sandwich));
    assert!(body.contains("9.00"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_quantity_falls_back_to_one() {
    let admin = client();
    login_ok(&admin, &admin_name(), &admin_password()).await;
    let (colleague, sandwich) = setup_colleague_and_sandwich(&admin, "3.25").await;

    let me = client();
    login_ok(&me, &colleague, "").await;

    // Unparseable quantity still places a single sandwich order
    let resp = place_order(&me, &[("sandwich_name", &sandwich), ("quantity", "lots")]).await;
    assert_eq!(location(&resp), "/order?notice=order_placed");

    let body = get_body(&me, "/details").await;
    assert!(body.contains(&sandwich));
    assert!(body.contains("3.25"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_sandwich_is_rejected() {
    let admin = client();
    login_ok(&admin, &admin_name(), &admin_password()).await;
    let (colleague, _) = setup_colleague_and_sandwich(&admin, "5.00").await;

    let me = client();
    login_ok(&me, &colleague, "").await;

    let resp = place_order(
        &me,
        &[("sandwich_name", "no-such-sandwich"), ("quantity", "1")],
    )
    .await;
    assert_eq!(location(&resp), "/order?error=unknown_selection");
}

// ============================================================================
// Authorization
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_regular_colleague_cannot_open_admin() {
    let admin = client();
    login_ok(&admin, &admin_name(), &admin_password()).await;
    let (colleague, _) = setup_colleague_and_sandwich(&admin, "5.00").await;

    let me = client();
    login_ok(&me, &colleague, "").await;

    let resp = me
        .get(format!("{}/admin", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_orders_on_behalf_of_colleague() {
    let admin = client();
    login_ok(&admin, &admin_name(), &admin_password()).await;
    let (colleague, sandwich) = setup_colleague_and_sandwich(&admin, "6.75").await;

    let resp = place_order(
        &admin,
        &[
            ("colleague_name", &colleague),
            ("sandwich_name", &sandwich),
            ("quantity", "1"),
        ],
    )
    .await;
    assert_eq!(location(&resp), "/order?notice=order_placed");

    // The order lands on the colleague, not the admin
    let body = get_body(&admin, "/details").await;
    assert!(body.contains(&colleague));
    assert!(body.contains(&sandwich));
}
