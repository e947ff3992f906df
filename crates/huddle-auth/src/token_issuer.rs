use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

/// Issues HS256 access tokens for authenticated users
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.ttl_secs,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
