use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendFriendRequestRequest {
    /// Recipient email, matched case-insensitively
    pub email: String,
}
