//! Fixed rate table for development and testing.

use async_trait::async_trait;
use ticker_types::{DomainError, RateSource, RateTable, SourceError};

/// Development rates: price of 1 BTC per currency.
const SAMPLE_RATES: &[(&str, f64)] = &[
    ("USD", 50000.0),
    ("EUR", 46000.0),
    ("GBP", 39500.0),
    ("JPY", 7_450_000.0),
    ("INR", 4_150_000.0),
    ("RUB", 4_600_000.0),
    ("CHF", 44500.0),
    ("AUD", 76000.0),
];

/// Serves the same table on every call.
#[derive(Debug, Clone)]
pub struct StaticRates {
    table: RateTable,
}

impl StaticRates {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, DomainError> {
        RateTable::from_pairs(pairs).map(Self::new)
    }

    /// The built-in development table.
    pub fn sample() -> Self {
        Self::new(RateTable::from_pairs(SAMPLE_RATES.iter().copied()).unwrap_or_default())
    }
}

impl Default for StaticRates {
    fn default() -> Self {
        Self::sample()
    }
}

#[async_trait]
impl RateSource for StaticRates {
    async fn current_rates(&self) -> Result<RateTable, SourceError> {
        Ok(self.table.clone())
    }
}
