use huddle_auth::{JwtValidator, SendRateLimiter, TokenIssuer};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub send_limiter: Arc<SendRateLimiter>,
}
