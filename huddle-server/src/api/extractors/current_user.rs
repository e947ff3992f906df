//! Axum extractor for the authenticated user

use crate::api::error::ApiError;
use crate::state::AppState;

use huddle_auth::bearer_token;
use huddle_core::User;
use huddle_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;

/// Resolves the `Authorization: Bearer` token to a full user record.
///
/// Any failure along the way (missing header, bad scheme, invalid or expired
/// token, deleted user) rejects with 401.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.user_id()?;

            let user = UserRepository::find_by_id(&state.pool, user_id)
                .await?
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "User no longer exists".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            Ok(CurrentUser(user))
        }
    }
}
