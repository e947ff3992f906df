use huddle_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Business outcomes of the friend-request engine.
///
/// Every expected condition (duplicate request, missing target, rate limit)
/// is a first-class variant, not exceptional control flow. `Infrastructure`
/// is the only variant that signals a system failure; handlers map it to a
/// 5xx while everything else stays in 4xx territory.
#[derive(Error, Debug)]
pub enum FriendRequestError {
    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("No user with email {email} {location}")]
    InvalidTarget {
        email: String,
        location: ErrorLocation,
    },

    #[error("Cannot send a friend request to yourself {location}")]
    SelfRequest { location: ErrorLocation },

    #[error("Friend request limit of {limit} per {window_secs}s reached {location}")]
    RateLimited {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("A request involving {email} already exists {location}")]
    AlreadyRequested {
        email: String,
        location: ErrorLocation,
    },

    #[error("No user with email {email} {location}")]
    UnknownSender {
        email: String,
        location: ErrorLocation,
    },

    #[error("No pending request from {email} {location}")]
    RequestNotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Infrastructure error: {message} {location}")]
    Infrastructure {
        message: String,
        location: ErrorLocation,
    },
}

impl From<DbError> for FriendRequestError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Unique violations are handled where the insert happens; anything
        // reaching this conversion is a store failure.
        Self::Infrastructure {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<huddle_auth::AuthError> for FriendRequestError {
    #[track_caller]
    fn from(e: huddle_auth::AuthError) -> Self {
        Self::Infrastructure {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FriendRequestError>;
