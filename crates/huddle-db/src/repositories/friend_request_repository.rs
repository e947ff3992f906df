use crate::Result as DbErrorResult;

use huddle_core::{FriendProfile, FriendRequest, RequestStatus};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct FriendRequestRepository;

impl FriendRequestRepository {
    /// Inserts a new request row. A duplicate (sender, recipient) pair
    /// surfaces as `DbError::UniqueViolation`.
    pub async fn create(pool: &SqlitePool, request: &FriendRequest) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO friend_requests (id, sender_id, recipient_id, status, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(request.id.to_string())
        .bind(request.sender_id.map(|id| id.to_string()))
        .bind(request.recipient_id.map(|id| id.to_string()))
        .bind(request.status.as_str())
        .bind(request.created_at.timestamp())
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn find_pending(
        pool: &SqlitePool,
        recipient_id: Uuid,
        sender_id: Uuid,
    ) -> DbErrorResult<Option<FriendRequest>> {
        let row = sqlx::query(
            r#"
              SELECT id, sender_id, recipient_id, status, created_at
              FROM friend_requests
              WHERE recipient_id = ? AND sender_id = ? AND status = 'pending'
              "#,
        )
        .bind(recipient_id.to_string())
        .bind(sender_id.to_string())
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| Self::map_request(&r)))
    }

    /// Any request row between the two users, in either direction and any
    /// status. Used to enforce symmetric uniqueness before an insert.
    pub async fn exists_between(pool: &SqlitePool, a: Uuid, b: Uuid) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
              SELECT COUNT(*) FROM friend_requests
              WHERE (sender_id = ?1 AND recipient_id = ?2)
                 OR (sender_id = ?2 AND recipient_id = ?1)
              "#,
        )
        .bind(a.to_string())
        .bind(b.to_string())
        .fetch_one(pool)
        .await?;

        Ok(count > 0)
    }

    /// Conditional transition out of Pending. Returns the affected-row count;
    /// 0 means the row was already resolved (or never existed) and the caller
    /// lost the race.
    pub async fn resolve_pending(
        pool: &SqlitePool,
        id: Uuid,
        status: RequestStatus,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              UPDATE friend_requests
              SET status = ?
              WHERE id = ? AND status = 'pending'
              "#,
        )
        .bind(status.as_str())
        .bind(id.to_string())
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Pending requests addressed to `user_id`, projecting the sender.
    pub async fn list_received_pending(
        pool: &SqlitePool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<(Vec<FriendProfile>, i64)> {
        Self::list_pending(pool, user_id, "recipient_id", "sender_id", limit, offset).await
    }

    /// Pending requests sent by `user_id`, projecting the recipient.
    pub async fn list_sent_pending(
        pool: &SqlitePool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<(Vec<FriendProfile>, i64)> {
        Self::list_pending(pool, user_id, "sender_id", "recipient_id", limit, offset).await
    }

    async fn list_pending(
        pool: &SqlitePool,
        user_id: Uuid,
        own_column: &str,
        counterpart_column: &str,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<(Vec<FriendProfile>, i64)> {
        // The INNER JOIN drops rows whose counterpart user was deleted.
        let total: i64 = sqlx::query_scalar(&format!(
            r#"
              SELECT COUNT(*) FROM friend_requests fr
              JOIN users u ON u.id = fr.{counterpart_column}
              WHERE fr.{own_column} = ? AND fr.status = 'pending'
              "#,
        ))
        .bind(user_id.to_string())
        .fetch_one(pool)
        .await?;

        let rows = sqlx::query(&format!(
            r#"
              SELECT u.email, u.display_name
              FROM friend_requests fr
              JOIN users u ON u.id = fr.{counterpart_column}
              WHERE fr.{own_column} = ? AND fr.status = 'pending'
              ORDER BY fr.created_at, fr.id
              LIMIT ? OFFSET ?
              "#,
        ))
        .bind(user_id.to_string())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok((rows.iter().map(Self::map_profile).collect(), total))
    }

    /// Accepted requests in either direction, projecting the counterpart of
    /// `user_id`. One directed accepted edge makes both sides visible.
    pub async fn list_friends(
        pool: &SqlitePool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<(Vec<FriendProfile>, i64)> {
        let id = user_id.to_string();

        let total: i64 = sqlx::query_scalar(
            r#"
              SELECT COUNT(*) FROM friend_requests fr
              JOIN users u ON u.id = CASE
                  WHEN fr.sender_id = ?1 THEN fr.recipient_id
                  ELSE fr.sender_id
              END
              WHERE (fr.sender_id = ?1 OR fr.recipient_id = ?1)
                AND fr.status = 'accepted'
              "#,
        )
        .bind(&id)
        .fetch_one(pool)
        .await?;

        let rows = sqlx::query(
            r#"
              SELECT u.email, u.display_name
              FROM friend_requests fr
              JOIN users u ON u.id = CASE
                  WHEN fr.sender_id = ?1 THEN fr.recipient_id
                  ELSE fr.sender_id
              END
              WHERE (fr.sender_id = ?1 OR fr.recipient_id = ?1)
                AND fr.status = 'accepted'
              ORDER BY fr.created_at, fr.id
              LIMIT ?2 OFFSET ?3
              "#,
        )
        .bind(&id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok((rows.iter().map(Self::map_profile).collect(), total))
    }

    fn map_request(row: &SqliteRow) -> FriendRequest {
        FriendRequest {
            id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
            sender_id: row
                .get::<Option<String>, _>("sender_id")
                .map(|s| Uuid::parse_str(&s).unwrap()),
            recipient_id: row
                .get::<Option<String>, _>("recipient_id")
                .map(|s| Uuid::parse_str(&s).unwrap()),
            status: RequestStatus::from_str(&row.get::<String, _>("status")).unwrap(),
            created_at: DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0).unwrap(),
        }
    }

    fn map_profile(row: &SqliteRow) -> FriendProfile {
        FriendProfile {
            email: row.get("email"),
            display_name: row.get("display_name"),
        }
    }
}
