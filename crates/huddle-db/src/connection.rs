use crate::{DbError, Result};

use std::panic::Location;

use error_location::ErrorLocation;

use sqlx::SqlitePool;

/// Apply schema migrations bundled with this crate.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
