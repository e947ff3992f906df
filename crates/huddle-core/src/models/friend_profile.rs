use serde::{Deserialize, Serialize};

/// Projected identity of the user on one side of a friend request, as it
/// appears in list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendProfile {
    pub email: String,
    pub display_name: Option<String>,
}
