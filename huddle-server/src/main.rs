use huddle_server::config::Config;
use huddle_server::{AppState, build_router, logger};

use huddle_auth::{JwtValidator, RateLimitConfig, SendRateLimiter, TokenIssuer};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_colored)?;

    info!("Starting huddle-server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database pool
    info!("Connecting to database: {}", config.database_path.display());

    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    huddle_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    if config.jwt_secret == Config::DEV_JWT_SECRET {
        warn!("JWT_SECRET not set - using built-in development secret");
    }

    // Build application state
    let state = AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::with_hs256(
            config.jwt_secret.as_bytes(),
            config.token_ttl_secs,
        )),
        jwt_validator: Arc::new(JwtValidator::with_hs256(config.jwt_secret.as_bytes())),
        send_limiter: Arc::new(SendRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit_requests,
            window_secs: config.rate_limit_window_secs,
        })),
    };

    // Build router and serve
    let app = build_router(state);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
