//! Request rules.
//!
//! Each rule is a named predicate evaluated in order; the first failure
//! short-circuits with a tagged [`ValidationError`].

use ticker_types::{ApiRequest, Direction, HttpVerb, Operation, RequestParams, ValidationError, is_crypto};

/// Smallest amount `convert` accepts.
pub const MIN_VALUE: f64 = 0.01;

/// Validated `convert` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertInput<'a> {
    pub currency_from: &'a str,
    pub currency_to: &'a str,
    pub value: f64,
    pub direction: Direction,
}

/// `method` must be present and name a supported operation.
pub fn operation_name(params: &RequestParams) -> Result<&str, ValidationError> {
    params
        .method
        .as_deref()
        .filter(|name| Operation::is_supported(name))
        .ok_or(ValidationError::UnknownOperation)
}

pub fn require_verb(req: &ApiRequest, expected: HttpVerb) -> Result<(), ValidationError> {
    if req.verb == expected {
        Ok(())
    } else {
        Err(ValidationError::WrongVerb {
            expected,
            got: req.verb,
        })
    }
}

/// Checks the `convert` fields. Direction comes from `currency_from` alone;
/// the two branches then demand exactly one crypto side.
pub fn convert_input(params: &RequestParams) -> Result<ConvertInput<'_>, ValidationError> {
    let direction = Direction::infer(params.currency_from.as_deref().unwrap_or_default());

    required(&params.method, "method")?;
    let value = numeric(required(&params.value, "value")?, "value")?;
    at_least(value, MIN_VALUE, "value")?;
    let currency_from = required(&params.currency_from, "currency_from")?;
    let currency_to = required(&params.currency_to, "currency_to")?;

    match direction {
        Direction::CryptoToFiat => {
            crypto(currency_from, "currency_from")?;
            fiat(currency_to, "currency_to")?;
        }
        Direction::FiatToCrypto => {
            fiat(currency_from, "currency_from")?;
            crypto(currency_to, "currency_to")?;
        }
    }

    Ok(ConvertInput {
        currency_from,
        currency_to,
        value,
        direction,
    })
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, ValidationError> {
    field.as_deref().ok_or(ValidationError::Required(name))
}

fn numeric(raw: &str, name: &'static str) -> Result<f64, ValidationError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotNumeric(name))
}

fn at_least(value: f64, min: f64, name: &'static str) -> Result<(), ValidationError> {
    if value >= min {
        Ok(())
    } else {
        Err(ValidationError::BelowMinimum { field: name, min })
    }
}

fn crypto(code: &str, name: &'static str) -> Result<(), ValidationError> {
    if is_crypto(code) {
        Ok(())
    } else {
        Err(ValidationError::MustBeCrypto(name))
    }
}

fn fiat(code: &str, name: &'static str) -> Result<(), ValidationError> {
    if is_crypto(code) {
        Err(ValidationError::MustBeFiat(name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_params(from: &str, to: &str, value: &str) -> RequestParams {
        RequestParams::from_pairs([
            ("method", "convert"),
            ("currency_from", from),
            ("currency_to", to),
            ("value", value),
        ])
    }

    #[test]
    fn test_operation_name_missing() {
        let params = RequestParams::default();
        assert_eq!(
            operation_name(&params),
            Err(ValidationError::UnknownOperation)
        );
    }

    #[test]
    fn test_operation_name_unsupported() {
        let params = RequestParams::from_pairs([("method", "withdraw")]);
        assert_eq!(
            operation_name(&params),
            Err(ValidationError::UnknownOperation)
        );
    }

    #[test]
    fn test_operation_name_supported() {
        let params = RequestParams::from_pairs([("method", "rates")]);
        assert_eq!(operation_name(&params), Ok("rates"));
    }

    #[test]
    fn test_require_verb() {
        let req = ApiRequest::new(HttpVerb::Post, RequestParams::default());
        assert!(require_verb(&req, HttpVerb::Post).is_ok());
        assert_eq!(
            require_verb(&req, HttpVerb::Get),
            Err(ValidationError::WrongVerb {
                expected: HttpVerb::Get,
                got: HttpVerb::Post
            })
        );
    }

    #[test]
    fn test_crypto_to_fiat() {
        let params = convert_params("BTC", "USD", "1.5");
        let input = convert_input(&params).unwrap();
        assert_eq!(input.direction, Direction::CryptoToFiat);
        assert_eq!(input.value, 1.5);
    }

    #[test]
    fn test_fiat_to_crypto() {
        let params = convert_params("USD", "BTC", "100");
        let input = convert_input(&params).unwrap();
        assert_eq!(input.direction, Direction::FiatToCrypto);
        assert_eq!(input.currency_from, "USD");
    }

    #[test]
    fn test_crypto_to_crypto_rejected() {
        let params = convert_params("BTC", "BTC", "1");
        assert_eq!(
            convert_input(&params),
            Err(ValidationError::MustBeFiat("currency_to"))
        );
    }

    #[test]
    fn test_fiat_to_fiat_rejected() {
        let params = convert_params("USD", "EUR", "1");
        assert_eq!(
            convert_input(&params),
            Err(ValidationError::MustBeCrypto("currency_to"))
        );
    }

    #[test]
    fn test_value_minimum() {
        for value in ["0", "-5", "0.009"] {
            let params = convert_params("BTC", "USD", value);
            assert!(matches!(
                convert_input(&params),
                Err(ValidationError::BelowMinimum { field: "value", .. })
            ));
        }
        assert!(convert_input(&convert_params("BTC", "USD", "0.01")).is_ok());
    }

    #[test]
    fn test_value_must_be_numeric() {
        for value in ["abc", "NaN", "inf", "1,5"] {
            let params = convert_params("BTC", "USD", value);
            assert_eq!(
                convert_input(&params),
                Err(ValidationError::NotNumeric("value"))
            );
        }
    }

    #[test]
    fn test_scientific_notation_is_numeric() {
        let input_params = convert_params("USD", "BTC", "1e3");
        assert_eq!(convert_input(&input_params).unwrap().value, 1000.0);
    }

    #[test]
    fn test_missing_fields() {
        let params = RequestParams::from_pairs([("method", "convert"), ("value", "1")]);
        assert_eq!(
            convert_input(&params),
            Err(ValidationError::Required("currency_from"))
        );

        let params = RequestParams::from_pairs([
            ("currency_from", "BTC"),
            ("currency_to", "USD"),
            ("value", "1"),
        ]);
        assert_eq!(
            convert_input(&params),
            Err(ValidationError::Required("method"))
        );
    }
}
