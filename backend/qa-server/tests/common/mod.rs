#![allow(dead_code)]

//! Test infrastructure for qa-server API tests

use qa_auth::AuthService;
use qa_db::IdentityRepository;
use qa_server::AppState;

use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

// Minimum bcrypt cost keeps the API tests fast
const TEST_HASH_COST: u32 = 4;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/qa-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool: pool.clone(),
        auth: AuthService::new(IdentityRepository::new(pool), TEST_HASH_COST),
        handler_timeout: Duration::from_secs(30),
    }
}

/// Build a POST /api/auth/register request
pub fn register_request(username: &str, email: &str, password: &str) -> Request<Body> {
    json_post(
        "/api/auth/register",
        json!({ "username": username, "email": email, "password": password }),
    )
}

/// Build a POST /api/auth/login request
pub fn login_request(email: &str, password: &str) -> Request<Body> {
    json_post(
        "/api/auth/login",
        json!({ "email": email, "password": password }),
    )
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}
