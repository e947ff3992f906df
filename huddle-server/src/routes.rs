use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Identity
        .route("/api/v1/auth/signup", post(crate::signup))
        .route("/api/v1/auth/login", post(crate::login))
        .route("/api/v1/users", get(crate::list_users))
        .route("/api/v1/users/search", get(crate::search_users))
        // Friend requests
        .route("/api/v1/friends", get(crate::list_friends))
        .route("/api/v1/friends/requests", post(crate::send_friend_request))
        .route(
            "/api/v1/friends/requests/resolve",
            post(crate::resolve_friend_request),
        )
        .route(
            "/api/v1/friends/requests/received",
            get(crate::list_received_requests),
        )
        .route(
            "/api/v1/friends/requests/sent",
            get(crate::list_sent_requests),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
