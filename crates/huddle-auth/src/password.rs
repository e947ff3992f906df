use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Hash a plaintext password with Argon2id and a fresh salt
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash
#[track_caller]
pub fn verify_password(password: &str, hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
