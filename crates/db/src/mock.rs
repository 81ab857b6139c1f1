use async_trait::async_trait;
use mockall::mock;
use openday_core::models::availability::{AvailabilityRow, NewAvailabilityRow};
use serde_json::Value;

use crate::store::AvailabilityStore;

// Mock store for handler tests that need to inject failures
mock! {
    pub AvailabilityStore {}

    #[async_trait]
    impl AvailabilityStore for AvailabilityStore {
        async fn list_ordered(&self) -> eyre::Result<Vec<AvailabilityRow>>;

        async fn find_by_date(&self, date: &str) -> eyre::Result<Option<AvailabilityRow>>;

        async fn upsert(&self, row: NewAvailabilityRow) -> eyre::Result<Value>;

        async fn delete_by_date(&self, date: &str) -> eyre::Result<()>;

        async fn ping(&self) -> eyre::Result<()>;
    }
}
