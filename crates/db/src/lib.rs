pub mod models;
pub mod postgres;
pub mod rest;
pub mod schema;
pub mod store;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub use postgres::PgStore;
pub use rest::RestStore;
pub use store::AvailabilityStore;

pub type DbPool = Pool<Postgres>;

/// Table holding one row per calendar date.
pub const AVAILABILITY_TABLE: &str = "availability";

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Like [`create_pool`] but defers connecting until the first query, so the
/// server can start (and report itself disconnected) while the store is down.
pub fn create_lazy_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)?;

    Ok(pool)
}
