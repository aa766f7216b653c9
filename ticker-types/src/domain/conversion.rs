//! Conversion arithmetic between BTC and a fiat currency.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::is_crypto;
use crate::error::DomainError;

/// Decimal places used when rendering a rate.
pub const RATE_DECIMALS: u32 = 2;

/// Which side of a conversion is the cryptocurrency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CryptoToFiat,
    FiatToCrypto,
}

impl Direction {
    /// Decided solely by whether `currency_from` is in the crypto set.
    pub fn infer(currency_from: &str) -> Self {
        if is_crypto(currency_from) {
            Direction::CryptoToFiat
        } else {
            Direction::FiatToCrypto
        }
    }

    /// The fiat code whose rate prices the conversion.
    pub fn fiat_side<'a>(self, currency_from: &'a str, currency_to: &'a str) -> &'a str {
        match self {
            Direction::CryptoToFiat => currency_to,
            Direction::FiatToCrypto => currency_from,
        }
    }

    /// Decimal places of the converted amount: cents for fiat, sub-satoshi for BTC.
    pub fn decimals(self) -> u32 {
        match self {
            Direction::CryptoToFiat => 2,
            Direction::FiatToCrypto => 10,
        }
    }
}

/// A computed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub direction: Direction,
    /// Price of 1 BTC in the fiat currency, at [`RATE_DECIMALS`].
    pub rate: Decimal,
    /// Converted amount, at `direction.decimals()`.
    pub converted: Decimal,
}

impl Quote {
    /// Converts `value` at `rate` (price of 1 BTC in the fiat side).
    ///
    /// Fails with [`DomainError::OutOfRange`] when either figure cannot carry
    /// its full fixed-point scale.
    pub fn compute(direction: Direction, value: f64, rate: f64) -> Result<Self, DomainError> {
        let amount = Decimal::from_f64(value).ok_or(DomainError::OutOfRange)?;
        let price = Decimal::from_f64(rate).ok_or(DomainError::OutOfRange)?;

        let raw = match direction {
            Direction::CryptoToFiat => amount.checked_mul(price),
            Direction::FiatToCrypto => amount.checked_div(price),
        }
        .ok_or(DomainError::OutOfRange)?;

        Ok(Self {
            direction,
            rate: to_fixed(price, RATE_DECIMALS).ok_or(DomainError::OutOfRange)?,
            converted: to_fixed(raw, direction.decimals()).ok_or(DomainError::OutOfRange)?,
        })
    }

    /// Converted amount as a fixed-point string.
    pub fn converted_value(&self) -> String {
        self.converted.to_string()
    }

    /// Rate as a fixed-point string with two decimals.
    pub fn rate_value(&self) -> String {
        self.rate.to_string()
    }
}

/// Rounds half away from zero to exactly `dp` decimals.
///
/// `None` when the 96-bit mantissa cannot hold `dp` decimals, where
/// `rescale` would otherwise drop them silently.
pub fn to_fixed(value: Decimal, dp: u32) -> Option<Decimal> {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    (rounded.scale() == dp).then_some(rounded)
}
