//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use truckreg_core::error::{AppError, ErrorKind};

/// Apply the embedded migrations that create and evolve the `trucks` table.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying trucks schema migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to migrate trucks schema: {e}"),
                e,
            )
        })?;

    info!("Trucks schema is up to date");
    Ok(())
}
