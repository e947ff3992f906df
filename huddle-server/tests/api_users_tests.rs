//! Integration tests for user listing and search handlers

mod common;

use crate::common::{body_json, create_test_state, create_test_user, get, send_request, token_for};

use axum::http::StatusCode;

#[tokio::test]
async fn test_list_users_paginated() {
    let state = create_test_state().await;
    let viewer = create_test_user(&state.pool, "viewer@x.com").await;
    for i in 0..12 {
        create_test_user(&state.pool, &format!("user{:02}@x.com", i)).await;
    }
    let token = token_for(&state, &viewer);

    let response = send_request(&state, get("/api/v1/users?page_size=5", &token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 13);
    assert_eq!(json["next"], 2);
    assert_eq!(json["previous"], serde_json::Value::Null);
    assert_eq!(json["results"].as_array().unwrap().len(), 5);

    let last = send_request(&state, get("/api/v1/users?page=3&page_size=5", &token)).await;
    let json = body_json(last).await;
    assert_eq!(json["next"], serde_json::Value::Null);
    assert_eq!(json["previous"], 2);
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_users_defaults_to_ten_per_page() {
    let state = create_test_state().await;
    let viewer = create_test_user(&state.pool, "viewer@x.com").await;
    for i in 0..14 {
        create_test_user(&state.pool, &format!("user{:02}@x.com", i)).await;
    }
    let token = token_for(&state, &viewer);

    let response = send_request(&state, get("/api/v1/users", &token)).await;
    let json = body_json(response).await;

    assert_eq!(json["count"], 15);
    assert_eq!(json["results"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_search_users_by_keyword() {
    let state = create_test_state().await;
    let viewer = create_test_user(&state.pool, "viewer@x.com").await;
    create_test_user(&state.pool, "alice@x.com").await;
    create_test_user(&state.pool, "alicia@x.com").await;
    create_test_user(&state.pool, "bob@x.com").await;
    let token = token_for(&state, &viewer);

    let response = send_request(&state, get("/api/v1/users/search?keyword=alic", &token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let mut emails: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["email"].as_str().unwrap())
        .collect();
    emails.sort();
    assert_eq!(emails, vec!["alice@x.com", "alicia@x.com"]);
}

#[tokio::test]
async fn test_search_users_matches_display_name() {
    let state = create_test_state().await;
    let viewer = create_test_user(&state.pool, "viewer@x.com").await;
    // display name is the email's local part, here "wizard"
    create_test_user(&state.pool, "wizard@x.com").await;
    let token = token_for(&state, &viewer);

    let response = send_request(&state, get("/api/v1/users/search?keyword=wiza", &token)).await;
    let json = body_json(response).await;

    assert_eq!(json["count"], 1);
    assert_eq!(json["results"][0]["display_name"], "wizard");
}

#[tokio::test]
async fn test_search_users_requires_keyword() {
    let state = create_test_state().await;
    let viewer = create_test_user(&state.pool, "viewer@x.com").await;
    let token = token_for(&state, &viewer);

    let missing = send_request(&state, get("/api/v1/users/search", &token)).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let blank = send_request(&state, get("/api/v1/users/search?keyword=%20%20", &token)).await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let json = body_json(blank).await;
    assert_eq!(json["error"]["field"], "keyword");
}

#[tokio::test]
async fn test_search_users_supports_paging() {
    let state = create_test_state().await;
    let viewer = create_test_user(&state.pool, "viewer@x.com").await;
    for i in 0..7 {
        create_test_user(&state.pool, &format!("match{}@x.com", i)).await;
    }
    let token = token_for(&state, &viewer);

    let response = send_request(
        &state,
        get("/api/v1/users/search?keyword=match&page=2&page_size=4", &token),
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["count"], 7);
    assert_eq!(json["previous"], 1);
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
}
