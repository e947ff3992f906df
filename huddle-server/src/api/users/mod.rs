pub mod search_query;
pub mod user_dto;
pub mod users;
