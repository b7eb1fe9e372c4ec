//! HTTP handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;
use crate::audit::RawCalculationRequest;
use crate::core::{AuditReport, Error};

/// Response for health check endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Error response structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error carried out of a handler, rendered as `{error}` with a status code
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Health check handler.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Audit calculation handler.
///
/// Rejects the whole request on the first invalid field; otherwise returns
/// one result per appliance in submission order, rounded for display.
pub async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RawCalculationRequest>, JsonRejection>,
) -> Result<Json<AuditReport>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        log::warn!("Rejected malformed calculate body: {}", rejection.body_text());
        Error::InvalidBody(rejection.body_text())
    })?;

    let report = state
        .calculator
        .parse_request(&raw)
        .and_then(|request| state.calculator.calculate(&request))
        .map_err(|e| {
            log::warn!("Rejected calculate request: {}", e);
            e
        })?;

    log::info!(
        "Calculated audit for {} appliance(s), {:.2} kWh/day",
        report.results.len(),
        report.total_energy
    );

    Ok(Json(report.rounded(state.calculator.settings().decimals)))
}
