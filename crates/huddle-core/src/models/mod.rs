pub mod friend_profile;
pub mod friend_request;
pub mod request_status;
pub mod user;
