pub mod detail_response;
pub mod friend_profile_dto;
pub mod friends;
pub mod resolve_friend_request_request;
pub mod send_friend_request_request;
