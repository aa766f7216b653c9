//! Rate source port.
//!
//! This trait defines the interface for upstream rate providers.
//! Implementations can be HTTP clients, fixed tables, etc.

use std::sync::Arc;

use crate::domain::RateTable;

/// Error type for rate source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Upstream request failed: {0}")]
    Unavailable(String),

    #[error("Upstream response could not be decoded: {0}")]
    Malformed(String),

    #[error("Upstream returned no rates")]
    Empty,
}

/// Port trait for the current BTC rate table.
///
/// Called exactly once per dispatched request. Caching, timeouts and retries
/// belong to the implementation.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    async fn current_rates(&self) -> Result<RateTable, SourceError>;
}

#[async_trait::async_trait]
impl<S: RateSource + ?Sized> RateSource for Box<S> {
    async fn current_rates(&self) -> Result<RateTable, SourceError> {
        (**self).current_rates().await
    }
}

#[async_trait::async_trait]
impl<S: RateSource + ?Sized> RateSource for Arc<S> {
    async fn current_rates(&self) -> Result<RateTable, SourceError> {
        (**self).current_rates().await
    }
}
