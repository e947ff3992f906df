use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Parse and validate the subject after signature verification
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
