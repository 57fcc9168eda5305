//! Integration tests for the authentication endpoints.

use reqwest::StatusCode;
use serde_json::{Value, json};

use storefront_fixture_integration_tests::TestContext;

/// The store is seeded with two users, so registration starts at id 3.
const SEEDED_USER_COUNT: i64 = 2;

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_creates_user_with_sequential_id() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/register"))
        .json(&json!({
            "email": "a@b.com",
            "firstName": "A",
            "lastName": "B",
            "password": "x"
        }))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], json!(SEEDED_USER_COUNT + 1));
    assert_eq!(body["email"], json!("a@b.com"));
    assert_eq!(body["firstName"], json!("A"));
    assert_eq!(body["lastName"], json!("B"));

    // The password must never be echoed
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_ids_increase_with_each_registration() {
    let ctx = TestContext::new().await;

    for n in 1..=3 {
        let resp = ctx
            .client
            .post(ctx.url("/api/auth/register"))
            .json(&json!({
                "email": format!("user{n}@example.com"),
                "firstName": "User",
                "lastName": format!("{n}"),
                "password": "irrelevant"
            }))
            .send()
            .await
            .expect("Failed to register");

        let body: Value = resp.json().await.expect("Failed to parse body");
        assert_eq!(body["id"], json!(SEEDED_USER_COUNT + n));
    }
}

#[tokio::test]
async fn test_register_with_missing_field_is_rejected() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/register"))
        .json(&json!({
            "email": "a@b.com",
            "firstName": "A",
            "password": "x"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], json!("All fields required"));
}

#[tokio::test]
async fn test_register_with_empty_field_is_rejected() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/register"))
        .json(&json!({
            "email": "a@b.com",
            "firstName": "",
            "lastName": "B",
            "password": "x"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_accepts_fixture_password_not_registered_one() {
    let ctx = TestContext::new().await;

    ctx.client
        .post(ctx.url("/api/auth/register"))
        .json(&json!({
            "email": "a@b.com",
            "firstName": "A",
            "lastName": "B",
            "password": "x"
        }))
        .send()
        .await
        .expect("Failed to register");

    // The fixture password succeeds even though the user registered with "x"
    let resp = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({ "email": "a@b.com", "password": "TestPassword123!" }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["token"], json!("mock-jwt-token"));
    assert_eq!(body["user"]["email"], json!("a@b.com"));
    assert!(body["user"].get("password").is_none());

    // The password the user actually registered with is rejected
    let resp = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({ "email": "a@b.com", "password": "x" }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], json!("Invalid credentials"));
}

#[tokio::test]
async fn test_login_with_seeded_user() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({
            "email": "john.doe@example.com",
            "password": "TestPassword123!"
        }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["user"]["id"], json!(1));
    assert_eq!(body["user"]["firstName"], json!("John"));
}

#[tokio::test]
async fn test_login_with_unknown_email_is_unauthorized() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "TestPassword123!"
        }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_missing_fields_is_rejected() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({ "email": "john.doe@example.com" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], json!("Email and password required"));
}
