#![allow(dead_code)]

use fleet_core::Identity;

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

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a test Identity with sensible defaults
pub fn create_test_identity(suffix: &str) -> Identity {
    Identity::new(
        format!("123-456-{}", suffix),
        format!("test-{}@email.com", suffix),
        format!("054444{}", suffix),
        "$argon2id$v=19$m=19456,t=2,p=1$c3R1YnNhbHQ$c3R1Ymhhc2g".to_string(),
    )
}
