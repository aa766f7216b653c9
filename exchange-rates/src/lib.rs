//! # Exchange Rates
//!
//! Adapters implementing the `RateSource` port.
//!
//! - [`BlockchainTicker`] reads a blockchain.info-style `/ticker` document and
//!   prices each currency with its `buy` quote.
//! - [`StaticRates`] serves a fixed in-process table for development and tests.
//!
//! # Example
//! ```ignore
//! let source = exchange_rates::build_source("https://blockchain.info/ticker", Duration::from_secs(10))?;
//! let table = source.current_rates().await?;
//! ```

use std::time::Duration;

use ticker_types::{RateSource, SourceError};

mod blockchain;
mod fixed;

pub use blockchain::BlockchainTicker;
pub use fixed::StaticRates;

/// Public ticker used when no URL is configured.
pub const DEFAULT_TICKER_URL: &str = "https://blockchain.info/ticker";

/// Source name selecting [`StaticRates::sample`] instead of an HTTP ticker.
pub const STATIC_SOURCE: &str = "static";

/// Builds a rate source from a ticker URL, or the fixed table for [`STATIC_SOURCE`].
pub fn build_source(url: &str, timeout: Duration) -> Result<Box<dyn RateSource>, SourceError> {
    if url == STATIC_SOURCE {
        tracing::info!("Using static development rates");
        return Ok(Box::new(StaticRates::sample()));
    }
    Ok(Box::new(BlockchainTicker::new(url, timeout)?))
}
