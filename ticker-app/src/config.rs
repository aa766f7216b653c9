//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use exchange_rates::DEFAULT_TICKER_URL;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// Ticker document URL, or `static` for the built-in table.
    pub ticker_url: String,
    /// Bound on each upstream ticker call.
    pub ticker_timeout: Duration,
    /// OTLP collector; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = get("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {e}"))?;

        let ticker_url = get("TICKER_URL").unwrap_or_else(|| DEFAULT_TICKER_URL.to_string());

        let timeout_secs: u64 = get("TICKER_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("TICKER_TIMEOUT_SECS must be whole seconds: {e}"))?;

        let otlp_endpoint = get("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        Ok(Self {
            port,
            ticker_url,
            ticker_timeout: Duration::from_secs(timeout_secs),
            otlp_endpoint,
        })
    }
}
