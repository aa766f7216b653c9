//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions and form structs only feed utoipa's document generation

use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

use ticker_types::{ConversionResult, Operation, Status};

/// Form fields of a `convert` request.
#[derive(Debug, Deserialize, ToSchema)]
struct ConvertForm {
    /// Must be `convert`
    #[schema(example = "convert")]
    method: String,
    /// Source currency; `BTC` converts to fiat, anything else converts to BTC
    #[schema(example = "BTC")]
    currency_from: String,
    #[schema(example = "USD")]
    currency_to: String,
    /// Amount to convert, at least 0.01
    #[schema(example = "1.5")]
    value: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Current BTC rates, sorted by ascending rate
#[utoipa::path(
    get,
    path = "/api/v1",
    tag = "ticker",
    params(
        ("method" = String, Query, description = "Must be `rates`"),
        ("currency" = Option<String>, Query, description = "Comma-separated currency codes to keep")
    ),
    responses(
        (status = 200, description = "Rates keyed by currency code", body = inline(serde_json::Value),
            example = json!({"status": "success", "code": 200, "data": {"EUR": 46000.0, "USD": 50000.0}})),
        (status = 400, description = "Bad request, or the requested codes when some are unknown", body = inline(serde_json::Value),
            example = json!(["USD", "XYZ"])),
        (status = 503, description = "Rate source unavailable")
    )
)]
async fn rates() {}

/// Convert between BTC and a fiat currency
#[utoipa::path(
    post,
    path = "/api/v1",
    tag = "ticker",
    request_body(content = ConvertForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Conversion result", body = ConversionResult),
        (status = 400, description = "Bad request", body = inline(serde_json::Value),
            example = json!({"status": "error", "code": 400, "message": "Bad request"})),
        (status = 502, description = "Rate source has no rate for the fiat currency"),
        (status = 503, description = "Rate source unavailable")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the ticker API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BTC Ticker API",
        version = "1.0.0",
        description = "Current Bitcoin rates and BTC/fiat conversion over a single endpoint.\n\nSelect the operation with the `method` field: `rates` (GET) or `convert` (POST). Every response is wrapped as `{status, code, data|message}`.",
        license(name = "MIT"),
    ),
    paths(health, rates, convert),
    components(schemas(ConversionResult, ConvertForm, Operation, Status)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "ticker", description = "Rates and conversion"),
    )
)]
pub struct ApiDoc;
