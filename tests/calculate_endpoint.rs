//! End-to-end checks of `POST /calculate` through the public router

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use energy_audit_lib::core::{AuditReport, Config};
use energy_audit_lib::server::{create_router, AppState, ErrorResponse};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> axum::Router {
    let mut config = Config::default();
    config.general.language = "en".to_string();
    create_router(Arc::new(AppState::new(&config)))
}

async fn send(body: serde_json::Value) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn reference_household_matches_hand_calculation() {
    let (status, bytes) = send(json!({
        "cost_per_kwh": 0.2,
        "appliances": [
            {"name": "Heater", "power_kw": 1, "hours_per_day": 5, "efficiency_ratio": 0.5, "count": 2}
        ]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let report: AuditReport = serde_json::from_slice(&bytes).unwrap();
    let heater = &report.results[0];
    assert_eq!(heater.daily_energy_consumption, 10.0);
    assert_eq!(heater.annual_energy_consumption, 3650.0);
    assert_eq!(heater.gap, 5.0);
    assert_eq!(heater.annual_savings, 365.0);
    assert_eq!(report.total_savings, 365.0);
}

#[tokio::test]
async fn watts_and_kilowatts_give_the_same_answer() {
    let in_kw = send(json!({
        "cost_per_kwh": 0.15,
        "appliances": [{"name": "Kettle", "power_kw": 1, "hours_per_day": 0.5, "efficiency_ratio": 0.9}]
    }))
    .await;
    let in_watts = send(json!({
        "cost_per_kwh": 0.15,
        "appliances": [{"name": "Kettle", "power_watts": 1000, "hours_per_day": 0.5, "efficiency_ratio": 0.9}]
    }))
    .await;

    assert_eq!(in_kw.0, StatusCode::OK);
    let a: AuditReport = serde_json::from_slice(&in_kw.1).unwrap();
    let b: AuditReport = serde_json::from_slice(&in_watts.1).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn zero_efficiency_returns_error_body() {
    let (status, bytes) = send(json!({
        "cost_per_kwh": 0.2,
        "appliances": [{"name": "Pump", "power_kw": 1, "hours_per_day": 2, "efficiency_ratio": 0}]
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "Invalid input for Pump: efficiency_ratio must be positive");
}

#[tokio::test]
async fn empty_appliance_list_is_rejected() {
    let (status, bytes) = send(json!({"cost_per_kwh": 0.2, "appliances": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert!(body.error.contains("at least one appliance"));
}

#[tokio::test]
async fn overflowing_figures_are_rejected_not_nulled() {
    let (status, bytes) = send(json!({
        "cost_per_kwh": 0.2,
        "appliances": [{"name": "Smelter", "power_kw": 1e305, "hours_per_day": 24, "efficiency_ratio": 0.5}]
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "Invalid input for Smelter: power_kw produces a non-finite result");
}
