use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,

    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// `email` is normalized before storage so lookups stay case-insensitive.
    pub fn new(email: &str, display_name: Option<String>, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            display_name,
            password_hash,
            is_active: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }
}

/// Canonical form used everywhere an email is stored or looked up.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
