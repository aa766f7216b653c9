//! Error types for the ticker service.

use crate::dto::HttpVerb;
use crate::ports::SourceError;

/// Message carried by every 400 envelope.
pub const BAD_REQUEST_MESSAGE: &str = "Bad request";

/// A failed request rule. All of these surface as the same 400 payload;
/// the tag only reaches logs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("operation name is missing or unsupported")]
    UnknownOperation,

    #[error("operation requires {expected}, got {got}")]
    WrongVerb { expected: HttpVerb, got: HttpVerb },

    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be numeric")]
    NotNumeric(&'static str),

    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: f64 },

    #[error("{0} must be a cryptocurrency")]
    MustBeCrypto(&'static str),

    #[error("{0} must not be a cryptocurrency")]
    MustBeFiat(&'static str),

    #[error("{0} is out of range")]
    OutOfRange(&'static str),

    #[error("no rates left to report")]
    NoRates,
}

/// Domain-level errors (computation failures).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Rate for {code} must be positive and finite, got {rate}")]
    InvalidRate { code: String, rate: f64 },

    #[error("No rate available for {0}")]
    MissingRate(String),

    #[error("Amount cannot be represented")]
    OutOfRange,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(#[from] ValidationError),

    /// Some requested currencies are absent from the table. The response body is
    /// the requested list itself, not an envelope.
    #[error("Unknown currencies in {0:?}")]
    CurrencyMismatch(Vec<String>),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The upstream table has no usable rate for a currency that passed validation.
    #[error("Bad gateway: {0}")]
    BadGateway(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) | AppError::CurrencyMismatch(_) => 400,
            AppError::NotImplemented(_) => 501,
            AppError::ServiceUnavailable(_) => 503,
            AppError::BadGateway(_) => 502,
        }
    }

    /// Fixed message exposed in the error envelope.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) | AppError::CurrencyMismatch(_) => BAD_REQUEST_MESSAGE,
            AppError::NotImplemented(_) => "Not Implemented",
            AppError::ServiceUnavailable(_) => "Service Unavailable",
            AppError::BadGateway(_) => "Bad Gateway",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::OutOfRange => AppError::BadRequest(ValidationError::OutOfRange("value")),
            e @ (DomainError::MissingRate(_) | DomainError::InvalidRate { .. }) => {
                AppError::BadGateway(e.to_string())
            }
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::ServiceUnavailable(err.to_string())
    }
}
