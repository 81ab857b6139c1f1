use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Creates the availability table if it is missing.
///
/// Only the `db-migrate` binary calls this. The server never provisions its
/// own schema; a missing table shows up as a failed status check.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            date DATE PRIMARY KEY,
            status TEXT NOT NULL DEFAULT 'available',
            message TEXT NULL,
            time_slots JSONB NULL DEFAULT '[]'::jsonb
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully");
    Ok(())
}
