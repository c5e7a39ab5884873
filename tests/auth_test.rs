//! Integration tests for login, registration, and bearer resolution.

mod helpers;

use http::StatusCode;

use helpers::{PASSWORD, TestApp, test_config};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({"message": "ok"}));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.create_user("johndoe123", "user").await;

    let response = app.login_raw("johndoe123", PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["access_token"].as_str().is_some());
    let cookie = response.headers["set-cookie"].to_str().unwrap();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new();
    app.create_user("johndoe123", "user").await;

    let wrong_password = app.login_raw("johndoe123", "wrongpassword").await;
    let unknown_user = app.login_raw("nobody", PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(
        wrong_password.body["message"],
        "Incorrect username or password"
    );
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "email": "john.doe@example.com",
                "username": "johndoe123",
                "first_name": "John",
                "last_name": "Doe",
                "password": PASSWORD,
                "password_confirm": PASSWORD,
                "is_active": true,
                "role": "user",
                "phone_number": "0123456789"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "New account was created");

    let token = app.login("johndoe123", PASSWORD).await;
    let profile = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["user"]["email"], "john.doe@example.com");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new();
    let original = app.create_user("johndoe123", "user").await;

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "email": "someone.else@example.com",
                "username": "johndoe123",
                "first_name": "Other",
                "last_name": "Person",
                "password": "different-password",
                "role": "admin",
                "phone_number": "0123456789"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");

    // The original account is untouched and still logs in with its password.
    app.login("johndoe123", PASSWORD).await;
    let token = app.token_for(&original, None);
    let profile = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(profile.body["user"]["role"], "user");
}

#[tokio::test]
async fn test_register_rejects_bad_phone_number() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "email": "john.doe@example.com",
                "username": "johndoe123",
                "first_name": "John",
                "last_name": "Doe",
                "password": PASSWORD,
                "role": "user",
                "phone_number": "123"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_confirmation_when_required() {
    let mut config = test_config();
    config.auth.require_password_confirmation = true;
    let app = TestApp::with_config(config);

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "email": "john.doe@example.com",
                "username": "johndoe123",
                "first_name": "John",
                "last_name": "Doe",
                "password": PASSWORD,
                "password_confirm": "something-else",
                "role": "user",
                "phone_number": "0123456789"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/todos", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers["www-authenticate"], "Bearer");
}

#[tokio::test]
async fn test_garbage_and_expired_tokens_are_indistinguishable() {
    let app = TestApp::new();
    let user = app.create_user("johndoe123", "user").await;
    let expired = app.token_for(&user, Some(chrono::Duration::minutes(-1)));

    let garbage = app.request("GET", "/todos", None, Some("not.a.token")).await;
    let stale = app.request("GET", "/todos", None, Some(&expired)).await;

    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body, stale.body);
}

#[tokio::test]
async fn test_token_signed_with_other_secret() {
    let app = TestApp::new();
    let user = app.create_user("johndoe123", "user").await;

    let mut other = test_config();
    other.auth.jwt_secret = "some-other-secret".to_string();
    let forged = TestApp::with_config(other).token_for(&user, None);

    let response = app.request("GET", "/todos", None, Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_from_cookie() {
    let app = TestApp::new();
    app.create_user("johndoe123", "user").await;
    let token = app.login("johndoe123", PASSWORD).await;

    let response = app.request_with_cookie("GET", "/todos", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_register_rejects_name_longer_than_column() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "email": "john.doe@example.com",
                "username": "johndoe123",
                "first_name": "J".repeat(51),
                "last_name": "Doe",
                "password": PASSWORD,
                "role": "user",
                "phone_number": "0123456789"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
