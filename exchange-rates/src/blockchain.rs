//! blockchain.info ticker adapter.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, warn};

use ticker_types::{RateSource, RateTable, SourceError};

/// One currency entry of the ticker document.
#[derive(Debug, Deserialize)]
struct TickerEntry {
    buy: Option<f64>,
}

/// HTTP client for a `/ticker` document of the form
/// `{"USD": {"15m": .., "last": .., "buy": .., "sell": .., "symbol": ".."}, ..}`.
pub struct BlockchainTicker {
    url: String,
    http: reqwest::Client,
}

impl BlockchainTicker {
    /// Creates a client; `timeout` bounds the whole upstream call.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn table_from(entries: BTreeMap<String, TickerEntry>) -> RateTable {
        let mut table = RateTable::new();
        for (code, entry) in entries {
            let Some(buy) = entry.buy else {
                warn!(currency = %code, "Ticker entry has no buy price");
                continue;
            };
            if let Err(e) = table.insert(code, buy) {
                warn!(error = %e, "Skipping unusable ticker rate");
            }
        }
        table
    }
}

#[async_trait]
impl RateSource for BlockchainTicker {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn current_rates(&self) -> Result<RateTable, SourceError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!("ticker returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let entries: BTreeMap<String, TickerEntry> = match serde_json::from_str(&body) {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = ?e, response = %body, "Failed to parse ticker response");
                return Err(SourceError::Malformed(e.to_string()));
            }
        };

        let table = Self::table_from(entries);
        if table.is_empty() {
            return Err(SourceError::Empty);
        }

        debug!(currencies = table.len(), "Fetched ticker rates");
        Ok(table)
    }
}
