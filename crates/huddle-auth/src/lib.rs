pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod rate_limit_config;
pub mod send_rate_limiter;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::{JwtValidator, bearer_token};
pub use password::{hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use send_rate_limiter::SendRateLimiter;
pub use token_issuer::TokenIssuer;

#[cfg(test)]
mod tests;
