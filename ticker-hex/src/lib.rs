//! # Ticker Hex
//!
//! Application service layer and HTTP adapter for the BTC ticker service.
//!
//! ## Architecture
//!
//! - `service/` - Dispatcher plus the `rates` and `convert` operations
//! - `validation/` - Ordered request rules shared by the operations
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: RateSource`, allowing
//! different upstream rate providers to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_tests;

pub use service::TickerService;
