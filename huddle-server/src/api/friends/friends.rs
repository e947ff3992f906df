//! Friend request REST API handlers
//!
//! Thin HTTP shims over `FriendRequestEngine`: extract the acting user,
//! delegate, and serialize. Status-code policy lives in the
//! `FriendRequestError -> ApiError` conversion.

use crate::api::pagination::{Page, PageQuery};
use crate::engine::FriendRequestEngine;
use crate::{
    ApiResult, CurrentUser, DetailResponse, FriendProfileDto, ResolveFriendRequestRequest,
    SendFriendRequestRequest,
};
use crate::state::AppState;

use axum::{
    Json,
    extract::{Query, State},
};

/// POST /api/v1/friends/requests
pub async fn send_friend_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<SendFriendRequestRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let engine = FriendRequestEngine::new(state.pool.clone(), state.send_limiter.clone());
    let recipient = engine.send(&user, &req.email).await?;

    Ok(Json(DetailResponse {
        detail: format!(
            "Friend request to {} has been sent successfully",
            recipient.email
        ),
    }))
}

/// POST /api/v1/friends/requests/resolve
pub async fn resolve_friend_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<ResolveFriendRequestRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let engine = FriendRequestEngine::new(state.pool.clone(), state.send_limiter.clone());
    let counterpart = engine.accept_or_reject(&user, &req.email, req.accept).await?;

    let detail = if req.accept {
        format!("You and {} are now friends", counterpart.email)
    } else {
        "Friend request rejected".to_string()
    };

    Ok(Json(DetailResponse { detail }))
}

/// GET /api/v1/friends/requests/received
pub async fn list_received_requests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<FriendProfileDto>>> {
    let engine = FriendRequestEngine::new(state.pool.clone(), state.send_limiter.clone());
    let (profiles, total) = engine
        .list_received_pending(&user, query.limit(), query.offset())
        .await?;

    Ok(Json(Page::new(
        profiles.into_iter().map(FriendProfileDto::from).collect(),
        total,
        &query,
    )))
}

/// GET /api/v1/friends/requests/sent
pub async fn list_sent_requests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<FriendProfileDto>>> {
    let engine = FriendRequestEngine::new(state.pool.clone(), state.send_limiter.clone());
    let (profiles, total) = engine
        .list_sent_pending(&user, query.limit(), query.offset())
        .await?;

    Ok(Json(Page::new(
        profiles.into_iter().map(FriendProfileDto::from).collect(),
        total,
        &query,
    )))
}

/// GET /api/v1/friends
pub async fn list_friends(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<FriendProfileDto>>> {
    let engine = FriendRequestEngine::new(state.pool.clone(), state.send_limiter.clone());
    let (profiles, total) = engine
        .list_friends(&user, query.limit(), query.offset())
        .await?;

    Ok(Json(Page::new(
        profiles.into_iter().map(FriendProfileDto::from).collect(),
        total,
        &query,
    )))
}
