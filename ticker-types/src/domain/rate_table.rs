//! Table of BTC prices keyed by currency code.

use std::collections::BTreeMap;

use crate::dto::RateList;
use crate::error::DomainError;

/// Price of 1 BTC in each currency, as supplied by the rate source for one request.
///
/// Every stored rate is finite and strictly positive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(code, rate)` pairs, rejecting unusable rates.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut table = Self::new();
        for (code, rate) in pairs {
            table.insert(code, rate)?;
        }
        Ok(table)
    }

    /// Inserts or replaces a rate.
    pub fn insert(&mut self, code: impl Into<String>, rate: f64) -> Result<(), DomainError> {
        let code = code.into();
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DomainError::InvalidRate { code, rate });
        }
        self.rates.insert(code, rate);
        Ok(())
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Currency codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Keeps only the entries whose code appears in `requested`.
    pub fn filtered(&self, requested: &[String]) -> RateTable {
        let rates = self
            .rates
            .iter()
            .filter(|(code, _)| requested.contains(code))
            .map(|(code, rate)| (code.clone(), *rate))
            .collect();
        RateTable { rates }
    }

    /// Set equality between this table's codes and `requested`,
    /// ignoring order and duplicates.
    pub fn covers_exactly(&self, requested: &[String]) -> bool {
        requested.iter().all(|code| self.contains(code))
            && self.codes().all(|code| requested.iter().any(|r| r == code))
    }

    /// Consumes the table into a list ordered by ascending rate.
    ///
    /// Equal rates keep ascending code order.
    pub fn into_sorted(self) -> RateList {
        let mut entries: Vec<(String, f64)> = self.rates.into_iter().collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        RateList::from(entries)
    }
}
