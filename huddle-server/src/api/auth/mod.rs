pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod signup_request;
pub mod signup_response;
