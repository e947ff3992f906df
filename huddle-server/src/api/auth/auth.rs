//! Signup and login handlers

use crate::{ApiError, ApiResult, LoginRequest, LoginResponse, SignupRequest, SignupResponse, UserDto};
use crate::state::AppState;

use huddle_auth::{hash_password, verify_password};
use huddle_core::{User, normalize_email};
use huddle_db::{DbError, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let email = normalize_email(&req.email);

    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation {
            message: "Email and password are required".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if req.password != req.confirm_password {
        return Err(ApiError::Validation {
            message: "Passwords did not match".to_string(),
            field: Some("confirm_password".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = hash_password(&req.password)?;
    let user = User::new(&email, req.display_name, password_hash);

    match UserRepository::create(&state.pool, &user).await {
        Ok(()) => {}
        Err(DbError::UniqueViolation { .. }) => {
            return Err(ApiError::Validation {
                message: "User already exists".to_string(),
                field: Some("email".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(e.into()),
    }

    log::info!("User {} registered", user.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user: UserDto::from(user),
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = normalize_email(&req.email);

    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation {
            message: "Email and password are required".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let user = UserRepository::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized {
            message: "User is not registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized {
            message: "User credentials entered are not correct".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.token_issuer.issue(user.id)?;
    UserRepository::record_login(&state.pool, user.id, Utc::now()).await?;

    log::info!("User {} logged in", user.email);

    Ok(Json(LoginResponse {
        message: "User authentication completed".to_string(),
        token,
    }))
}
