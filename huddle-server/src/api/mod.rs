pub mod auth;
pub mod error;
pub mod extractors;
pub mod friends;
pub mod pagination;
pub mod users;
