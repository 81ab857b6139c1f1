use openday_core::models::availability::AvailabilityRow;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub date: String,
    pub status: String,
    pub message: Option<String>,
    pub time_slots: Option<Value>,
}

impl From<DbAvailability> for AvailabilityRow {
    fn from(row: DbAvailability) -> Self {
        Self {
            date: row.date,
            status: row.status,
            message: row.message,
            time_slots: row.time_slots,
        }
    }
}
