#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum_test::TestServer;
use eyre::{eyre, Result};
use openday_api::{
    build_router,
    config::{ApiConfig, StoreConfig},
    ApiState,
};
use openday_core::models::availability::{AvailabilityRow, NewAvailabilityRow};
use openday_db::AvailabilityStore;
use serde_json::{json, Value};
use tracing::Level;

/// Table in a `BTreeMap`, which keeps ISO dates in ascending order for free.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<BTreeMap<String, AvailabilityRow>>,
}

impl InMemoryStore {
    pub fn with_rows(rows: Vec<AvailabilityRow>) -> Self {
        Self {
            rows: Mutex::new(rows.into_iter().map(|row| (row.date.clone(), row)).collect()),
        }
    }

    pub fn rows(&self) -> Vec<AvailabilityRow> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl AvailabilityStore for InMemoryStore {
    async fn list_ordered(&self) -> Result<Vec<AvailabilityRow>> {
        Ok(self.rows())
    }

    async fn find_by_date(&self, date: &str) -> Result<Option<AvailabilityRow>> {
        Ok(self.rows.lock().unwrap().get(date).cloned())
    }

    async fn upsert(&self, row: NewAvailabilityRow) -> Result<Value> {
        // Same constraints and coercions as the real table
        let date = text(row.date)
            .ok_or_else(|| eyre!("null value in column \"date\" violates not-null constraint"))?;
        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(eyre!("invalid input syntax for type date: \"{}\"", date));
        }
        let status = text(row.status)
            .ok_or_else(|| eyre!("null value in column \"status\" violates not-null constraint"))?;

        let saved = AvailabilityRow {
            date: date.clone(),
            status,
            message: text(row.message),
            time_slots: row.time_slots,
        };
        self.rows.lock().unwrap().insert(date, saved.clone());

        Ok(json!([saved]))
    }

    async fn delete_by_date(&self, date: &str) -> Result<()> {
        self.rows.lock().unwrap().remove(date);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// JSON to text the way the database unwraps a bound JSON scalar.
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

pub fn row(date: &str, status: &str, message: Option<&str>, time_slots: Value) -> AvailabilityRow {
    AvailabilityRow {
        date: date.to_string(),
        status: status.to_string(),
        message: message.map(str::to_string),
        time_slots: Some(time_slots),
    }
}

pub fn test_config(public_dir: &Path, admin_dir: &Path) -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        store: StoreConfig::Postgres {
            database_url: "postgres://unused@localhost/openday".to_string(),
        },
        log_level: Level::INFO,
        cors_origins: None,
        request_timeout: None,
        public_dir: public_dir.to_path_buf(),
        admin_dir: admin_dir.to_path_buf(),
    }
}

pub fn test_server(store: Arc<dyn AvailabilityStore>) -> TestServer {
    let missing = PathBuf::from("does-not-exist");
    test_server_with_config(store, &test_config(&missing, &missing))
}

pub fn test_server_with_config(store: Arc<dyn AvailabilityStore>, config: &ApiConfig) -> TestServer {
    let state = Arc::new(ApiState { store });
    let app = build_router(state, config).unwrap();
    TestServer::new(app).unwrap()
}
