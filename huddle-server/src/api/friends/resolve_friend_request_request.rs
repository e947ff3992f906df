use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResolveFriendRequestRequest {
    /// Email of the user whose pending request is being resolved
    pub email: String,
    /// true accepts the request, false rejects it
    pub accept: bool,
}
