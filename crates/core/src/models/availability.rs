//! Availability records in both of their shapes.
//!
//! Rows are what the store persists (snake_case columns `date`, `status`,
//! `message`, `time_slots`). Everything the HTTP layer sends or receives uses
//! camelCase. The `From` impls at the bottom of this file are the only place
//! where one shape is turned into the other.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status assumed for any date without a stored row.
pub const STATUS_AVAILABLE: &str = "available";

/// A persisted availability row as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRow {
    pub date: String,
    pub status: String,
    pub message: Option<String>,
    #[serde(default)]
    pub time_slots: Option<Value>,
}

/// Row sent to the store on upsert. Fields are forwarded exactly as the
/// caller supplied them, including when they are missing or of the wrong
/// JSON type; the store decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAvailabilityRow {
    pub date: Option<Value>,
    pub status: Option<Value>,
    pub message: Option<Value>,
    pub time_slots: Option<Value>,
}

/// Body of `POST /api/availability`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveAvailabilityRequest {
    pub date: Option<Value>,
    pub status: Option<Value>,
    pub message: Option<Value>,
    pub time_slots: Option<Value>,
}

impl SaveAvailabilityRequest {
    /// Picks the known fields out of any JSON body.
    ///
    /// Never fails: a body that is not an object carries no fields, and a
    /// JSON `null` counts as missing.
    pub fn from_body(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };
        let mut take = |key: &str| fields.remove(key).filter(|value| !value.is_null());

        Self {
            date: take("date"),
            status: take("status"),
            message: take("message"),
            time_slots: take("timeSlots"),
        }
    }
}

/// A single date as served by `GET /api/availability/:date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDay {
    pub date: String,
    pub status: String,
    pub message: Option<String>,
    pub time_slots: Value,
}

impl AvailabilityDay {
    /// The record served for a date nobody has saved: open, no note, no slots.
    pub fn default_for(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            status: STATUS_AVAILABLE.to_string(),
            message: None,
            time_slots: Value::Array(Vec::new()),
        }
    }
}

/// One entry of the `days` map in the list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub status: String,
    pub message: Option<String>,
    pub time_slots: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAvailable {
    pub date: String,
    pub time_slots: Value,
}

/// Response of `GET /api/availability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityOverview {
    pub days: BTreeMap<String, DayEntry>,
    pub next_available: Option<NextAvailable>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Null or missing slot data reads back as an empty list.
pub fn normalize_time_slots(time_slots: Option<Value>) -> Value {
    match time_slots {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(slots) => slots,
    }
}

impl From<SaveAvailabilityRequest> for NewAvailabilityRow {
    fn from(request: SaveAvailabilityRequest) -> Self {
        Self {
            date: request.date,
            status: request.status,
            message: request.message,
            time_slots: request.time_slots,
        }
    }
}

impl From<AvailabilityRow> for AvailabilityDay {
    fn from(row: AvailabilityRow) -> Self {
        Self {
            date: row.date,
            status: row.status,
            message: row.message,
            time_slots: normalize_time_slots(row.time_slots),
        }
    }
}

impl From<AvailabilityRow> for DayEntry {
    fn from(row: AvailabilityRow) -> Self {
        Self {
            status: row.status,
            message: row.message,
            time_slots: normalize_time_slots(row.time_slots),
        }
    }
}
