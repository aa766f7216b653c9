//! Data Transfer Objects (DTOs) for requests and responses.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Request DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Transport verb of the incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Other,
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVerb::Get => f.write_str("GET"),
            HttpVerb::Post => f.write_str("POST"),
            HttpVerb::Other => f.write_str("another verb"),
        }
    }
}

/// Named input fields of the endpoint, merged from query string and body.
///
/// Values are trimmed; a blank value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub method: Option<String>,
    /// Comma-separated currency filter for `rates`.
    pub currency: Option<String>,
    pub currency_from: Option<String>,
    pub currency_to: Option<String>,
    /// Raw amount for `convert`; parsed during validation.
    pub value: Option<String>,
}

impl RequestParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        params.merge(pairs);
        params
    }

    /// Applies `pairs` on top of the current fields; later keys win.
    pub fn merge<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.set(key.as_ref(), value.as_ref());
        }
    }

    /// Sets a single field. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        let value = value.trim();
        let value = (!value.is_empty()).then(|| value.to_string());
        match key {
            "method" => self.method = value,
            "currency" => self.currency = value,
            "currency_from" => self.currency_from = value,
            "currency_to" => self.currency_to = value,
            "value" => self.value = value,
            _ => {}
        }
    }
}

/// A request as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub verb: HttpVerb,
    pub params: RequestParams,
}

impl ApiRequest {
    pub fn new(verb: HttpVerb, params: RequestParams) -> Self {
        Self { verb, params }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome marker of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform response wrapper: `{status, code, data|message}`.
///
/// Build it through [`Envelope::success`] or [`Envelope::error`] so that
/// `status` and `code` stay consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            code: 200,
            data: Some(data),
            message: None,
        }
    }

    /// Error envelope; `code` must be a 4xx or 5xx status.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        debug_assert!(code >= 400, "error envelope with non-error code {code}");
        Self {
            status: Status::Error,
            code,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Rates ordered for output. Serialized as a JSON object whose key order is
/// the list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateList(Vec<(String, f64)>);

impl RateList {
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.iter().find(|(c, _)| c == code).map(|(_, rate)| *rate)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(code, _)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, f64)>> for RateList {
    fn from(entries: Vec<(String, f64)>) -> Self {
        RateList(entries)
    }
}

impl Serialize for RateList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, rate) in &self.0 {
            map.serialize_entry(code, rate)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RateList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RateListVisitor)
    }
}

struct RateListVisitor;

impl<'de> Visitor<'de> for RateListVisitor {
    type Value = RateList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of currency codes to rates")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RateList, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((code, rate)) = access.next_entry::<String, f64>()? {
            entries.push((code, rate));
        }
        Ok(RateList(entries))
    }
}

/// Result of a `convert` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResult {
    #[schema(example = "BTC")]
    pub currency_from: String,
    #[schema(example = "USD")]
    pub currency_to: String,
    /// The input amount
    #[schema(example = 1.0)]
    pub value: f64,
    /// Converted amount: 2 decimals for fiat, 10 for BTC
    #[schema(example = "50000.00")]
    pub converted_value: String,
    /// Price of 1 BTC in the fiat currency, 2 decimals
    #[schema(example = "50000.00")]
    pub rate: String,
}

/// Operation-specific success payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Rates(RateList),
    Conversion(ConversionResult),
}
