use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: huddle.db)
    pub database_path: PathBuf,

    /// JWT secret for HS256 signing and validation
    pub jwt_secret: String,

    /// Access token lifetime in seconds (default: 86400)
    pub token_ttl_secs: i64,

    /// Rate limit: max friend-request sends per sender per window (default: 3)
    pub rate_limit_requests: u32,

    /// Rate limit: window in seconds (default: 60)
    pub rate_limit_window_secs: u64,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Fallback secret so a bare `cargo run` works in development. main()
    /// logs a warning when this is in use.
    pub const DEV_JWT_SECRET: &'static str = "huddle-development-secret-do-not-deploy";

    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let config = Self {
            bind_addr,

            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "huddle.db".to_string())
                .into(),

            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| Self::DEV_JWT_SECRET.to_string()),

            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86_400),

            rate_limit_requests: std::env::var("RATE_LIMIT_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),

            rate_limit_window_secs: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| LevelFilter::from_str(&s).ok())
                .unwrap_or(LevelFilter::Info),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        Ok(config)
    }
}
