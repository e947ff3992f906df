pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::friend_profile::FriendProfile;
pub use models::friend_request::FriendRequest;
pub use models::request_status::RequestStatus;
pub use models::user::{User, normalize_email};
