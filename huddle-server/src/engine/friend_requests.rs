//! Friend-request lifecycle engine
//!
//! Enforces the request state machine (`Pending -> Accepted | Rejected`,
//! both terminal), symmetric uniqueness of relationships, and the per-sender
//! send throttle. Handlers own the HTTP mapping; everything here returns
//! typed results.

use crate::engine::error::{FriendRequestError, Result};

use huddle_auth::SendRateLimiter;
use huddle_core::{FriendProfile, FriendRequest, RequestStatus, User, normalize_email};
use huddle_db::{DbError, FriendRequestRepository, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

pub struct FriendRequestEngine {
    pool: SqlitePool,
    limiter: Arc<SendRateLimiter>,
}

impl FriendRequestEngine {
    pub fn new(pool: SqlitePool, limiter: Arc<SendRateLimiter>) -> Self {
        Self { pool, limiter }
    }

    /// Send a friend request from `sender` to the user behind
    /// `recipient_email`. Returns the resolved recipient on success.
    ///
    /// The limiter is consulted after the recipient resolves but before the
    /// insert, and its count is incremented even when the attempt is then
    /// rejected. A duplicate in either direction fails with
    /// `AlreadyRequested`; the ordered-pair unique constraint backstops
    /// concurrent same-direction sends.
    pub async fn send(&self, sender: &User, recipient_email: &str) -> Result<User> {
        let email = normalize_email(recipient_email);
        if email.is_empty() {
            return Err(FriendRequestError::InvalidInput {
                message: "Recipient email is required".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let recipient = UserRepository::find_by_email(&self.pool, &email)
            .await?
            .ok_or_else(|| FriendRequestError::InvalidTarget {
                email: email.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if recipient.id == sender.id {
            return Err(FriendRequestError::SelfRequest {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let count = self.limiter.increment_and_check(sender.id)?;
        if count > self.limiter.max_requests() {
            return Err(FriendRequestError::RateLimited {
                limit: self.limiter.max_requests(),
                window_secs: self.limiter.window_secs(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Symmetric uniqueness: a request in either direction, whatever its
        // status, blocks a new one.
        if FriendRequestRepository::exists_between(&self.pool, sender.id, recipient.id).await? {
            return Err(FriendRequestError::AlreadyRequested {
                email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let request = FriendRequest::new(sender.id, recipient.id);
        match FriendRequestRepository::create(&self.pool, &request).await {
            Ok(()) => {}
            // Lost a same-direction race; the outcome is the same as the
            // pre-check firing.
            Err(DbError::UniqueViolation { .. }) => {
                return Err(FriendRequestError::AlreadyRequested {
                    email,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        log::info!("Friend request {} -> {} created", sender.email, email);

        Ok(recipient)
    }

    /// Resolve a pending request addressed to `acting` from the user behind
    /// `counterpart_email`. Returns the counterpart on success.
    ///
    /// The transition is a conditional update on the row still being
    /// Pending; a concurrent resolution makes the second caller observe
    /// `RequestNotFound`, so a request can never transition twice.
    pub async fn accept_or_reject(
        &self,
        acting: &User,
        counterpart_email: &str,
        accept: bool,
    ) -> Result<User> {
        let email = normalize_email(counterpart_email);

        let counterpart = UserRepository::find_by_email(&self.pool, &email)
            .await?
            .ok_or_else(|| FriendRequestError::UnknownSender {
                email: email.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let request = FriendRequestRepository::find_pending(&self.pool, acting.id, counterpart.id)
            .await?
            .ok_or_else(|| FriendRequestError::RequestNotFound {
                email: email.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = if accept {
            RequestStatus::Accepted
        } else {
            RequestStatus::Rejected
        };

        let affected =
            FriendRequestRepository::resolve_pending(&self.pool, request.id, status).await?;
        if affected == 0 {
            return Err(FriendRequestError::RequestNotFound {
                email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::info!(
            "Friend request {} -> {} {}",
            email,
            acting.email,
            status.as_str()
        );

        Ok(counterpart)
    }

    /// Pending requests addressed to `user`, projecting the sender
    pub async fn list_received_pending(
        &self,
        user: &User,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<FriendProfile>, i64)> {
        Ok(FriendRequestRepository::list_received_pending(&self.pool, user.id, limit, offset)
            .await?)
    }

    /// Pending requests sent by `user`, projecting the recipient
    pub async fn list_sent_pending(
        &self,
        user: &User,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<FriendProfile>, i64)> {
        Ok(FriendRequestRepository::list_sent_pending(&self.pool, user.id, limit, offset).await?)
    }

    /// Accepted requests in either direction, projecting the counterpart
    pub async fn list_friends(
        &self,
        user: &User,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<FriendProfile>, i64)> {
        Ok(FriendRequestRepository::list_friends(&self.pool, user.id, limit, offset).await?)
    }
}
