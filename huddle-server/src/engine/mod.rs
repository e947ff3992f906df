pub mod error;
pub mod friend_requests;

pub use error::FriendRequestError;
pub use friend_requests::FriendRequestEngine;
