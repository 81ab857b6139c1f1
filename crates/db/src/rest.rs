//! Store client for a hosted PostgREST endpoint (Supabase and friends).
//!
//! The hosted database exposes each table at `{base_url}/rest/v1/{table}` and
//! authenticates with the project key sent both as `apikey` and as a bearer
//! token. Filters are query parameters such as `date=eq.2024-01-01`.

use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use openday_core::models::availability::{AvailabilityRow, NewAvailabilityRow};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

use crate::{store::AvailabilityStore, AVAILABILITY_TABLE};

const SELECT_COLUMNS: &str = "date,status,message,time_slots";

#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    pub fn with_client(client: Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/rest/v1/{}",
                base_url.trim_end_matches('/'),
                AVAILABILITY_TABLE
            ),
            api_key: api_key.into(),
        }
    }

    /// Full URL of the availability table.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .wrap_err("Failed to reach availability store")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(eyre!("Availability store responded with {}: {}", status, body));
        }

        Ok(response)
    }

    fn list_request(&self) -> RequestBuilder {
        self.request(Method::GET)
            .query(&[("select", SELECT_COLUMNS), ("order", "date.asc")])
    }

    fn find_request(&self, date: &str) -> RequestBuilder {
        let filter = format!("eq.{date}");
        self.request(Method::GET)
            .query(&[("select", SELECT_COLUMNS), ("date", filter.as_str())])
    }

    /// Insert-or-merge on the `date` key, asking for the written rows back.
    fn upsert_request(&self, row: &NewAvailabilityRow) -> RequestBuilder {
        self.request(Method::POST)
            .query(&[("on_conflict", "date")])
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(row)
    }

    fn delete_request(&self, date: &str) -> RequestBuilder {
        let filter = format!("eq.{date}");
        self.request(Method::DELETE)
            .query(&[("date", filter.as_str())])
    }

    fn ping_request(&self) -> RequestBuilder {
        self.request(Method::GET)
            .query(&[("select", "date"), ("limit", "1")])
    }
}

#[async_trait]
impl AvailabilityStore for RestStore {
    async fn list_ordered(&self) -> Result<Vec<AvailabilityRow>> {
        tracing::debug!("Listing availability rows from {}", self.endpoint);

        let rows = Self::send(self.list_request()).await?.json().await?;
        Ok(rows)
    }

    async fn find_by_date(&self, date: &str) -> Result<Option<AvailabilityRow>> {
        tracing::debug!("Getting availability for {}", date);

        let rows: Vec<AvailabilityRow> = Self::send(self.find_request(date)).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn upsert(&self, row: NewAvailabilityRow) -> Result<Value> {
        tracing::debug!("Upserting availability for {:?}", row.date);

        let saved = Self::send(self.upsert_request(&row)).await?.json().await?;
        Ok(saved)
    }

    async fn delete_by_date(&self, date: &str) -> Result<()> {
        tracing::debug!("Deleting availability for {}", date);

        Self::send(self.delete_request(date)).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Self::send(self.ping_request()).await?;
        Ok(())
    }
}
