use super::{ContentSource, Result, SourceError};
use crate::event::Event;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TABLE: &str = "events";
pub const DEFAULT_ORDER_BY: &str = "date";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Events fetched from the hosted record store's REST endpoint.
///
/// One request per fetch: `GET {base_url}/rest/v1/{table}?select=*&order={order_by}.asc`.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: Client,
    base_url: String,
    table: String,
    order_by: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            table: DEFAULT_TABLE.to_string(),
            order_by: DEFAULT_ORDER_BY.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

#[async_trait]
impl ContentSource for RemoteSource {
    fn describe(&self) -> String {
        format!("record store table {:?} at {}", self.table, self.base_url)
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let endpoint = self.endpoint();
        let order = format!("{}.asc", self.order_by);
        debug!("Fetching events from {} ordered by {}", endpoint, order);

        let mut request = self
            .client
            .get(&endpoint)
            .query(&[("select", "*"), ("order", order.as_str())])
            .timeout(self.timeout);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Record store rejected fetch from {}: {}", endpoint, status);
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let events: Vec<Event> = serde_json::from_slice(&body)?;
        debug!("Fetched {} events from {}", events.len(), endpoint);
        Ok(events)
    }
}
