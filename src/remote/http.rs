//! HTTP implementation of [`OrderBackend`] against the hosted REST API.
//!
//! Supabase exposes PostgREST endpoints under `/rest/v1/`; every request
//! carries the anon key both as `apikey` and as a bearer token. Inserts send
//! a single-element array and ask for the inserted representation back so the
//! assigned id reaches the caller.

use crate::config::RemoteConfig;
use crate::errors::{Error, Result};
use crate::models::Order;
use crate::remote::OrderBackend;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

const ORDERS_TABLE: &str = "orders";

/// Client for the hosted collection store.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: RemoteConfig,
}

impl HttpBackend {
    /// Creates a backend from remote credentials.
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{ORDERS_TABLE}", self.config.base_url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }
}

#[async_trait]
impl OrderBackend for HttpBackend {
    async fn insert(&self, order: &Order) -> Result<Order> {
        debug!("Inserting order into remote table `{ORDERS_TABLE}`");
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            // PostgREST takes a JSON array of rows for inserts
            .json(&[order])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let mut inserted: Vec<Order> = response.json().await?;
        inserted.pop().ok_or_else(|| Error::Remote {
            status: status.as_u16(),
            message: "insert returned no representation".to_string(),
        })
    }

    async fn list_desc(&self) -> Result<Vec<Order>> {
        debug!("Listing orders from remote table `{ORDERS_TABLE}`");
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "id.desc")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(Into::into)
    }
}
