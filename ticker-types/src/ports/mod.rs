//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not concrete implementations.

mod rate_source;

pub use rate_source::{RateSource, SourceError};
