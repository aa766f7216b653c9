//! # Ticker Types
//!
//! Domain types and port traits for the BTC ticker service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (RateTable, Operation, conversion arithmetic)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Request parameters and response envelopes for the API boundary
//! - `error/` - Validation, domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CRYPTO_CURRENCIES, Direction, Operation, Quote, RateTable, SUPPORTED_OPERATIONS, is_crypto,
};
pub use dto::*;
pub use error::{AppError, DomainError, ValidationError};
pub use ports::{RateSource, SourceError};
