#![allow(dead_code)]

use qa_core::Identity;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Build an identity fixture with a plausible (non-functional) hash
pub fn test_identity(username: &str, email: &str) -> Identity {
    Identity::new(
        username.to_string(),
        email.to_string(),
        format!("$2b$10$testhash.for.{}", username),
    )
}
