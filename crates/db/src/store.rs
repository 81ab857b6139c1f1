use async_trait::async_trait;
use eyre::Result;
use openday_core::models::availability::{AvailabilityRow, NewAvailabilityRow};
use serde_json::Value;

/// The external table of availability rows, keyed by `date`.
///
/// Every method is a single round trip. Errors are store failures; a missing
/// row is not an error and comes back as `Ok(None)` from [`find_by_date`].
///
/// [`find_by_date`]: AvailabilityStore::find_by_date
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// All rows, ordered by date ascending.
    async fn list_ordered(&self) -> Result<Vec<AvailabilityRow>>;

    async fn find_by_date(&self, date: &str) -> Result<Option<AvailabilityRow>>;

    /// Inserts the row, or overwrites every column of the row with the same
    /// date. Returns the written rows as the store reports them.
    async fn upsert(&self, row: NewAvailabilityRow) -> Result<Value>;

    /// Removes the row for `date`. Succeeds when there is no such row.
    async fn delete_by_date(&self, date: &str) -> Result<()>;

    /// Cheap query proving the store is reachable and the table exists.
    async fn ping(&self) -> Result<()>;
}
