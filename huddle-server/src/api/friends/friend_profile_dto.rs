use huddle_core::FriendProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FriendProfileDto {
    pub email: String,
    pub display_name: Option<String>,
}

impl From<FriendProfile> for FriendProfileDto {
    fn from(p: FriendProfile) -> Self {
        Self {
            email: p.email,
            display_name: p.display_name,
        }
    }
}
