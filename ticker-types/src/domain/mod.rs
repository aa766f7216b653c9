//! Domain layer - pure business types.

mod conversion;
mod currency;
mod operation;
mod rate_table;

pub use conversion::{Direction, Quote, to_fixed};
pub use currency::{CRYPTO_CURRENCIES, is_crypto};
pub use operation::{Operation, SUPPORTED_OPERATIONS};
pub use rate_table::RateTable;
