//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use todo_api::AppState;
use todo_auth::{Claims, JwtEncoder, MemoryUserStore, PasswordHasher, UserStore};
use todo_core::config::AppConfig;
use todo_entity::todo::{Todo, TodoInput};
use todo_entity::user::{CreateUser, User, UserRole};
use todo_service::{MemoryTodoStore, TodoStore};

/// Password given to every seeded user.
pub const PASSWORD: &str = "12345aA@";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Backing user store, for seeding and inspection
    pub users: Arc<MemoryUserStore>,
    /// Backing task store, for seeding and inspection
    pub todos: Arc<MemoryTodoStore>,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a tweaked configuration
    pub fn with_config(config: AppConfig) -> Self {
        let users = Arc::new(MemoryUserStore::new());
        let todos = Arc::new(MemoryTodoStore::new());

        let state = AppState::new(Arc::new(config.clone()), users.clone(), todos.clone())
            .expect("Failed to build app state");

        Self {
            router: todo_api::build_app(state),
            config,
            users,
            todos,
        }
    }

    /// Create a test user with [`PASSWORD`] and return it
    pub async fn create_user(&self, username: &str, role: &str) -> User {
        let hasher = PasswordHasher::new(&self.config.auth).expect("Failed to build hasher");
        self.users
            .insert(CreateUser {
                email: format!("{username}@example.com"),
                username: username.to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                password_hash: hasher.hash_password(PASSWORD).expect("Failed to hash"),
                is_active: true,
                role: UserRole::new(role),
                phone_number: "0123456789".to_string(),
            })
            .await
            .expect("Failed to create test user")
    }

    /// Create a task owned by `user_id`
    pub async fn create_todo(&self, user_id: i64, title: &str) -> Todo {
        self.todos
            .insert(
                user_id,
                &TodoInput {
                    title: title.to_string(),
                    description: "This is a todo test".to_string(),
                    priority: 5,
                    completed: false,
                },
            )
            .await
            .expect("Failed to create test todo")
    }

    /// Sign a token directly, bypassing login
    pub fn token_for(&self, user: &User, ttl: Option<chrono::Duration>) -> String {
        JwtEncoder::new(&self.config.auth)
            .issue(&Claims::for_user(user), ttl)
            .expect("Failed to sign token")
            .access_token
    }

    /// Login through the API and return the access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self.login_raw(username, password).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// POST the login form and return the raw response
    pub async fn login_raw(&self, username: &str, password: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(format!(
                "username={username}&password={}",
                password.replace('@', "%40")
            )))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a request authenticated by the `access_token` cookie
    pub async fn request_with_cookie(&self, method: &str, path: &str, token: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Cookie", format!("access_token={token}"))
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Configuration with a fixed secret and a cheap Argon2 work factor
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.argon2.memory_kib = 256;
    config.auth.argon2.iterations = 1;
    config.auth.argon2.parallelism = 1;
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
