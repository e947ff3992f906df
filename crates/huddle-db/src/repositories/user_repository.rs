use crate::Result as DbErrorResult;

use huddle_core::User;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub async fn create(pool: &SqlitePool, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, email, display_name, password_hash, is_active, created_at, last_login
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(user.is_active as i64)
        .bind(user.created_at.timestamp())
        .bind(user.last_login.map(|dt| dt.timestamp()))
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, display_name, password_hash, is_active, created_at, last_login
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| Self::map_user(&r)))
    }

    /// Lookup by stored (normalized) email.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, display_name, password_hash, is_active, created_at, last_login
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| Self::map_user(&r)))
    }

    /// Marks the user active and stamps `last_login`, matching the login-time
    /// side effects of the identity subsystem.
    pub async fn record_login(
        pool: &SqlitePool,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query("UPDATE users SET is_active = 1, last_login = ? WHERE id = ?")
            .bind(at.timestamp())
            .bind(id.to_string())
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn list_paginated(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<(Vec<User>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        let rows = sqlx::query(
            r#"
              SELECT id, email, display_name, password_hash, is_active, created_at, last_login
              FROM users
              ORDER BY created_at, id
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok((rows.iter().map(Self::map_user).collect(), total))
    }

    /// Substring search against email or display name.
    pub async fn search_paginated(
        pool: &SqlitePool,
        keyword: &str,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<(Vec<User>, i64)> {
        let total: i64 = sqlx::query_scalar(
            r#"
              SELECT COUNT(*) FROM users
              WHERE email LIKE '%' || ? || '%' OR display_name LIKE '%' || ? || '%'
              "#,
        )
        .bind(keyword)
        .bind(keyword)
        .fetch_one(pool)
        .await?;

        let rows = sqlx::query(
            r#"
              SELECT id, email, display_name, password_hash, is_active, created_at, last_login
              FROM users
              WHERE email LIKE '%' || ? || '%' OR display_name LIKE '%' || ? || '%'
              ORDER BY created_at, id
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(keyword)
        .bind(keyword)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok((rows.iter().map(Self::map_user).collect(), total))
    }

    fn map_user(row: &SqliteRow) -> User {
        User {
            id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
            email: row.get("email"),
            display_name: row.get("display_name"),
            password_hash: row.get("password_hash"),
            is_active: row.get::<i64, _>("is_active") != 0,
            created_at: DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0).unwrap(),
            last_login: row
                .get::<Option<i64>, _>("last_login")
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        }
    }
}
