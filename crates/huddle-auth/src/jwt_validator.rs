use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Validates HS256 access tokens
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a JWT and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }
}

/// Extract the token from an `Authorization` header value
#[track_caller]
pub fn bearer_token(header_value: Option<&str>) -> AuthErrorResult<&str> {
    let value = header_value.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
}
