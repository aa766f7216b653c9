//! # Ticker Client SDK
//!
//! A typed Rust client for the BTC ticker API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use ticker_types::{ConversionResult, Envelope, RateList};

/// Path of the multiplexed endpoint.
const API_PATH: &str = "/api/v1";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ticker API client.
pub struct TickerClient {
    base_url: String,
    http: Client,
}

impl TickerClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Current rates sorted by value, restricted to `currencies` when non-empty.
    pub async fn rates(&self, currencies: &[&str]) -> Result<RateList, ClientError> {
        let mut query = vec![("method", "rates".to_string())];
        if !currencies.is_empty() {
            query.push(("currency", currencies.join(",")));
        }
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, API_PATH))
            .query(&query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Converts `value` from one currency to another; one side must be BTC.
    pub async fn convert(
        &self,
        currency_from: &str,
        currency_to: &str,
        value: f64,
    ) -> Result<ConversionResult, ClientError> {
        let value = value.to_string();
        let form = [
            ("method", "convert"),
            ("currency_from", currency_from),
            ("currency_to", currency_to),
            ("value", value.as_str()),
        ];
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, API_PATH))
            .form(&form)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            let envelope: Envelope<T> = serde_json::from_str(&body)?;
            envelope.data.ok_or_else(|| ClientError::Api {
                status: status.as_u16(),
                message: "response carried no data".into(),
            })
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Envelope message, or the echoed currency list of a filter mismatch.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| body.to_string()),
        Ok(Value::Array(codes)) => {
            let codes: Vec<&str> = codes.iter().filter_map(Value::as_str).collect();
            format!("unknown currency in {}", codes.join(","))
        }
        _ => body.to_string(),
    }
}
