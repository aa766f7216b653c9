//! Ticker Application Service
//!
//! Dispatches the single endpoint to the `rates` and `convert` operations.
//! Contains NO infrastructure logic - pure business orchestration.

use tracing::{debug, warn};

use ticker_types::{
    ApiRequest, AppError, ConversionResult, DomainError, HttpVerb, Operation, Payload, Quote,
    RateList, RateSource, RateTable, ValidationError,
};

use crate::validation;

/// Application service for the ticker endpoint.
///
/// Generic over `S: RateSource` - the upstream adapter is injected at compile time.
pub struct TickerService<S: RateSource> {
    source: S,
}

impl<S: RateSource> TickerService<S> {
    /// Creates a new ticker service with the given rate source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validates the operation name, fetches the rate table once and runs the
    /// matching operation against it.
    #[tracing::instrument(skip(self, req), fields(verb = %req.verb, method = req.params.method.as_deref()))]
    pub async fn handle(&self, req: &ApiRequest) -> Result<Payload, AppError> {
        let name = validation::operation_name(&req.params)?;
        let operation =
            Operation::from_name(name).ok_or_else(|| AppError::NotImplemented(name.to_string()))?;

        let table = self.fetch_rates().await?;
        debug!(%operation, currencies = table.len(), "Dispatching operation");

        match operation {
            Operation::Rates => rates(req, &table).map(Payload::Rates),
            Operation::Convert => convert(req, &table).map(Payload::Conversion),
        }
    }

    async fn fetch_rates(&self) -> Result<RateTable, AppError> {
        match self.source.current_rates().await {
            Ok(table) if !table.is_empty() => Ok(table),
            Ok(_) => {
                warn!("Rate source returned an empty table");
                Err(AppError::ServiceUnavailable("no rates available".into()))
            }
            Err(e) => {
                warn!(error = %e, "Rate source unavailable");
                Err(e.into())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Reports the table sorted by ascending rate, optionally restricted to the
/// comma-separated `currency` list.
pub fn rates(req: &ApiRequest, table: &RateTable) -> Result<RateList, AppError> {
    validation::require_verb(req, HttpVerb::Get)?;

    let table = match req.params.currency.as_deref() {
        Some(filter) => {
            let requested: Vec<String> = filter.split(',').map(String::from).collect();
            let filtered = table.filtered(&requested);
            if !filtered.covers_exactly(&requested) {
                debug!(?requested, "Requested currencies missing from table");
                return Err(AppError::CurrencyMismatch(requested));
            }
            filtered
        }
        None => table.clone(),
    };

    if table.is_empty() {
        return Err(ValidationError::NoRates.into());
    }

    Ok(table.into_sorted())
}

/// Converts `value` between BTC and a fiat currency at the current rate.
pub fn convert(req: &ApiRequest, table: &RateTable) -> Result<ConversionResult, AppError> {
    validation::require_verb(req, HttpVerb::Post)?;
    let input = validation::convert_input(&req.params)?;

    let fiat = input
        .direction
        .fiat_side(input.currency_from, input.currency_to);
    let rate = table.get(fiat).ok_or_else(|| {
        warn!(currency = fiat, "No upstream rate for validated currency");
        DomainError::MissingRate(fiat.to_string())
    })?;

    let quote = Quote::compute(input.direction, input.value, rate)?;

    Ok(ConversionResult {
        currency_from: input.currency_from.to_string(),
        currency_to: input.currency_to.to_string(),
        value: input.value,
        converted_value: quote.converted_value(),
        rate: quote.rate_value(),
    })
}
