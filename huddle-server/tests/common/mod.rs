#![allow(dead_code)]

//! Test infrastructure for huddle-server API tests

use huddle_auth::{JwtValidator, RateLimitConfig, SendRateLimiter, TokenIssuer};
use huddle_core::User;
use huddle_db::UserRepository;
use huddle_server::AppState;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/huddle-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing with the default 3-per-60s send limiter
pub async fn create_test_state() -> AppState {
    create_test_state_with_limiter(RateLimitConfig::default()).await
}

pub async fn create_test_state_with_limiter(config: RateLimitConfig) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, 3600)),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        send_limiter: Arc::new(SendRateLimiter::new(config)),
    }
}

/// Insert a user directly; display name is the email's local part
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> User {
    let display_name = email.split('@').next().unwrap().to_string();
    let user = User::new(email, Some(display_name), "unusable-hash".into());

    UserRepository::create(pool, &user)
        .await
        .expect("Failed to create test user");

    user
}

/// Issue a bearer token for the user
pub fn token_for(state: &AppState, user: &User) -> String {
    state
        .token_issuer
        .issue(user.id)
        .expect("Failed to issue test token")
}

pub fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

/// Drive one request through a fresh router instance
pub async fn send_request(state: &AppState, request: Request<Body>) -> Response<Body> {
    huddle_server::build_router(state.clone())
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
