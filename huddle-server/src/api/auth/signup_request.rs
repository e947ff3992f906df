use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
