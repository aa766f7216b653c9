//! Collects endpoint fields from the query string and request body.

use axum::http::{HeaderMap, Method, header::CONTENT_TYPE};
use serde_json::Value;

use ticker_types::{HttpVerb, RequestParams};

pub fn verb_of(method: &Method) -> HttpVerb {
    match *method {
        Method::GET => HttpVerb::Get,
        Method::POST => HttpVerb::Post,
        _ => HttpVerb::Other,
    }
}

/// Query fields first, then body fields on top. The body is read as JSON when
/// the content type says so, otherwise as a urlencoded form.
pub fn collect_params(query: Option<&str>, headers: &HeaderMap, body: &[u8]) -> RequestParams {
    let mut params = RequestParams::default();
    if let Some(query) = query {
        params.merge(form_urlencoded::parse(query.as_bytes()));
    }

    if body.is_empty() {
        return params;
    }

    if is_json(headers) {
        params.merge(json_fields(body));
    } else {
        params.merge(form_urlencoded::parse(body));
    }
    params
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

fn json_fields(body: &[u8]) -> Vec<(String, String)> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(key, value)| scalar(value).map(|v| (key, v)))
            .collect(),
        Ok(_) | Err(_) => {
            tracing::debug!("Ignoring request body that is not a JSON object");
            Vec::new()
        }
    }
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if b { "1" } else { "0" }.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
