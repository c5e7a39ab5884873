//! Integration tests for admin task endpoints.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_admin_reads_all() {
    let app = TestApp::new();
    let user = app.create_user("johndoe123", "user").await;
    let admin = app.create_user("admin", "admin").await;
    app.create_todo(user.id, "Todo Test").await;
    app.create_todo(admin.id, "Admin Todo").await;
    let token = app.token_for(&admin, None);

    let response = app.request("GET", "/todos/admin", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_user_role_forbidden() {
    let app = TestApp::new();
    let user = app.create_user("johndoe123", "user").await;
    let todo = app.create_todo(user.id, "Todo Test").await;
    let token = app.token_for(&user, None);
    let path = format!("/todos/admin/{}", todo.id);

    let list = app.request("GET", "/todos/admin", None, Some(&token)).await;
    let get = app.request("GET", &path, None, Some(&token)).await;
    let delete = app.request("DELETE", &path, None, Some(&token)).await;

    assert_eq!(list.status, StatusCode::FORBIDDEN);
    assert_eq!(get.status, StatusCode::FORBIDDEN);
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
    assert_eq!(list.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_role_match_is_exact() {
    let app = TestApp::new();
    let user = app.create_user("shouty", "ADMIN").await;
    let token = app.token_for(&user, None);

    let response = app.request("GET", "/todos/admin", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_read_and_delete_any() {
    let app = TestApp::new();
    let user = app.create_user("johndoe123", "user").await;
    let admin = app.create_user("admin", "admin").await;
    let todo = app.create_todo(user.id, "Todo Test").await;
    let token = app.token_for(&admin, None);
    let path = format!("/todos/admin/{}", todo.id);

    let found = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["user_id"], user.id);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_without_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/todos/admin", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
