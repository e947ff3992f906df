#![allow(dead_code)]

//! Shared test infrastructure for repository tests

use huddle_core::User;

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

/// Inserts a user and returns it
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> User {
    let user = User::new(email, Some(email.split('@').next().unwrap().into()), "hash".into());

    huddle_db::UserRepository::create(pool, &user)
        .await
        .expect("Failed to create test user");

    user
}
