//! User listing and search handlers

use crate::api::pagination::{Page, PageQuery};
use crate::{ApiError, ApiResult, CurrentUser, SearchQuery, UserDto};
use crate::state::AppState;

use huddle_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<UserDto>>> {
    let (users, total) =
        UserRepository::list_paginated(&state.pool, query.limit(), query.offset()).await?;

    Ok(Json(Page::new(
        users.into_iter().map(UserDto::from).collect(),
        total,
        &query,
    )))
}

/// GET /api/v1/users/search?keyword=
pub async fn search_users(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Page<UserDto>>> {
    let keyword = query
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::Validation {
            message: "search keyword is required".to_string(),
            field: Some("keyword".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let page_query = query.page_query();
    let (users, total) = UserRepository::search_paginated(
        &state.pool,
        keyword,
        page_query.limit(),
        page_query.offset(),
    )
    .await?;

    Ok(Json(Page::new(
        users.into_iter().map(UserDto::from).collect(),
        total,
        &page_query,
    )))
}
