pub mod friend_request_repository;
pub mod user_repository;
