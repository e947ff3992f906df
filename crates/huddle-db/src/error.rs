use huddle_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    // Split out so callers can treat a duplicate insert as a recoverable
    // business outcome rather than an infrastructure failure.
    #[error("Unique constraint violation {location}")]
    UniqueViolation { location: ErrorLocation },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = source {
            if db.is_unique_violation() {
                return Self::UniqueViolation {
                    location: ErrorLocation::from(Location::caller()),
                };
            }
        }
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
