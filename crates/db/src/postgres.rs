use async_trait::async_trait;
use eyre::Result;
use openday_core::models::availability::{AvailabilityRow, NewAvailabilityRow};
use serde_json::Value;

use crate::{models::DbAvailability, store::AvailabilityStore, DbPool};

/// Store backed by a direct PostgreSQL connection pool.
///
/// Dates are bound as text and cast by the server, so a malformed date
/// string fails the query instead of being rejected here. Upserted fields
/// arrive as raw JSON and are unwrapped to text by the server as well: a
/// number becomes its decimal text, anything uncastable fails the query.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AvailabilityStore for PgStore {
    async fn list_ordered(&self) -> Result<Vec<AvailabilityRow>> {
        tracing::debug!("Listing availability rows");

        let rows = sqlx::query_as::<_, DbAvailability>(
            r#"
            SELECT date::text AS date, status, message, time_slots
            FROM availability
            ORDER BY date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_date(&self, date: &str) -> Result<Option<AvailabilityRow>> {
        tracing::debug!("Getting availability for {}", date);

        let row = sqlx::query_as::<_, DbAvailability>(
            r#"
            SELECT date::text AS date, status, message, time_slots
            FROM availability
            WHERE date = $1::date
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn upsert(&self, row: NewAvailabilityRow) -> Result<Value> {
        tracing::debug!("Upserting availability for {:?}", row.date);

        let saved = sqlx::query_as::<_, DbAvailability>(
            r#"
            INSERT INTO availability (date, status, message, time_slots)
            VALUES (
                ($1::jsonb #>> '{}')::date,
                $2::jsonb #>> '{}',
                $3::jsonb #>> '{}',
                $4::jsonb
            )
            ON CONFLICT (date) DO UPDATE
            SET status = EXCLUDED.status,
                message = EXCLUDED.message,
                time_slots = EXCLUDED.time_slots
            RETURNING date::text AS date, status, message, time_slots
            "#,
        )
        .bind(row.date)
        .bind(row.status)
        .bind(row.message)
        .bind(row.time_slots)
        .fetch_one(&self.pool)
        .await?;

        // Same representation the REST store returns: an array of written rows
        Ok(serde_json::to_value(vec![AvailabilityRow::from(saved)])?)
    }

    async fn delete_by_date(&self, date: &str) -> Result<()> {
        tracing::debug!("Deleting availability for {}", date);

        sqlx::query(
            r#"
            DELETE FROM availability
            WHERE date = $1::date
            "#,
        )
        .bind(date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1 FROM availability LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(())
    }
}
