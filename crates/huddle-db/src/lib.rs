pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::run_migrations;
pub use error::{DbError, Result};
pub use repositories::friend_request_repository::FriendRequestRepository;
pub use repositories::user_repository::UserRepository;
