//! Crypto/fiat classification of currency codes.

/// Codes treated as the crypto side of a conversion.
///
/// There is no fiat whitelist: every code outside this set is fiat.
pub const CRYPTO_CURRENCIES: &[&str] = &["BTC"];

/// Returns true when `code` belongs to the crypto set (exact, case-sensitive match).
pub fn is_crypto(code: &str) -> bool {
    CRYPTO_CURRENCIES.contains(&code)
}
