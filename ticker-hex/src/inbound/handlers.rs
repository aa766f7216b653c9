//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use ticker_types::{ApiRequest, AppError, Envelope, RateSource};

use super::params::{collect_params, verb_of};
use crate::TickerService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<S: RateSource> {
    pub service: TickerService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::warn!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        match self.0 {
            // The filter mismatch answers with the requested list itself.
            AppError::CurrencyMismatch(codes) => (status, Json(codes)).into_response(),
            err => {
                let body = Envelope::<()>::error(status.as_u16(), err.public_message());
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// The multiplexed `rates` / `convert` endpoint.
#[tracing::instrument(skip(state, headers, body), fields(verb = %method))]
pub async fn dispatch<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = ApiRequest::new(
        verb_of(&method),
        collect_params(query.as_deref(), &headers, &body),
    );
    let payload = state.service.handle(&req).await?;
    Ok(Json(Envelope::success(payload)))
}
