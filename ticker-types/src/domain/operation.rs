//! Operations multiplexed over the single API endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Operation names accepted in the `method` field.
///
/// Checked before handler lookup, so a name listed here without a matching
/// [`Operation`] variant surfaces as 501 rather than 400.
pub const SUPPORTED_OPERATIONS: &[&str] = &["rates", "convert"];

/// An operation with a bound handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Report current rates, optionally filtered.
    Rates,
    /// Convert a value between BTC and a fiat currency.
    Convert,
}

impl Operation {
    /// Whether `name` is in the supported operation list.
    pub fn is_supported(name: &str) -> bool {
        SUPPORTED_OPERATIONS.contains(&name)
    }

    /// Resolves the handler bound to `name`, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rates" => Some(Operation::Rates),
            "convert" => Some(Operation::Convert),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Rates => "rates",
            Operation::Convert => "convert",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
