pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, signup},
        login_request::LoginRequest,
        login_response::LoginResponse,
        signup_request::SignupRequest,
        signup_response::SignupResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    friends::{
        detail_response::DetailResponse,
        friend_profile_dto::FriendProfileDto,
        friends::{
            list_friends, list_received_requests, list_sent_requests, resolve_friend_request,
            send_friend_request,
        },
        resolve_friend_request_request::ResolveFriendRequestRequest,
        send_friend_request_request::SendFriendRequestRequest,
    },
    users::{
        search_query::SearchQuery,
        user_dto::UserDto,
        users::{list_users, search_users},
    },
};

pub use crate::engine::{FriendRequestEngine, FriendRequestError};
pub use crate::routes::build_router;
pub use crate::state::AppState;
