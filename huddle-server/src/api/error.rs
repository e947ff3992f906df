//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes. Business errors from the friend-request engine keep their
//! machine-readable codes; the status mapping lives here, not in the engine.

use crate::engine::FriendRequestError;

use huddle_auth::AuthError;
use huddle_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "SELF_REQUEST", "RATE_LIMITED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Business rule rejection (400) with a specific code
    #[error("Bad request [{code}]: {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Forbidden action (403)
    #[error("Forbidden [{code}]: {message} {location}")]
    Forbidden {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Missing or invalid credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Throttled (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::BadRequest { code, message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: code.into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Forbidden { code, message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: code.into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::TooManyRequests { message, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiErrorBody {
                    code: "RATE_LIMITED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::PasswordHash { .. }
            | AuthError::JwtEncode { .. }
            | AuthError::LimiterUnavailable { .. } => {
                log::error!("Auth infrastructure error: {}", e);
                ApiError::Internal {
                    message: "Authentication backend failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => ApiError::Unauthorized {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Map engine outcomes to HTTP semantics
impl From<FriendRequestError> for ApiError {
    #[track_caller]
    fn from(e: FriendRequestError) -> Self {
        match e {
            FriendRequestError::InvalidInput { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            FriendRequestError::InvalidTarget { .. } => ApiError::BadRequest {
                code: "INVALID_TARGET",
                message: "This user is invalid".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            FriendRequestError::SelfRequest { .. } => ApiError::Forbidden {
                code: "SELF_REQUEST",
                message: "You can not send a friend request to yourself".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            FriendRequestError::RateLimited { .. } => ApiError::TooManyRequests {
                message: "You have reached the friend request limit. Please try again later."
                    .to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            FriendRequestError::AlreadyRequested { email, .. } => ApiError::BadRequest {
                code: "ALREADY_REQUESTED",
                message: format!("A friend request involving {} already exists", email),
                location: ErrorLocation::from(Location::caller()),
            },
            FriendRequestError::UnknownSender { .. } => ApiError::BadRequest {
                code: "UNKNOWN_SENDER",
                message: "The user who sent this request does not exist".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            FriendRequestError::RequestNotFound { .. } => ApiError::BadRequest {
                code: "REQUEST_NOT_FOUND",
                message: "This friend request does not exist".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            FriendRequestError::Infrastructure { message, .. } => {
                log::error!("Engine infrastructure error: {}", message);
                ApiError::Internal {
                    message: "Friend request backend failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
