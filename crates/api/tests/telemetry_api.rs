//! Integration tests for the telemetry routes the rendering layer consumes.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};

use ambiente_core::metric::Metric;
use ambiente_core::series::{ActuatorReading, ActuatorState, Reading};
use ambiente_core::timefmt::parse_instant;
use ambiente_ingest::{CycleData, TelemetryStore};

fn reading(ts: &str, value: f64) -> Reading {
    Reading {
        at: parse_instant(ts).expect("test timestamp"),
        value,
    }
}

/// A store seeded with one committed refresh cycle: ideal temperature,
/// no humidity data, alarm on.
fn seeded_store() -> Arc<TelemetryStore> {
    let store = TelemetryStore::new();
    store.refresh(CycleData {
        metrics: vec![
            (
                Metric::Temperature,
                vec![
                    reading("2024-05-01T12:00:00Z", 21.5),
                    reading("2024-05-01T12:00:08Z", 22.0),
                ],
            ),
            (Metric::Humidity, Vec::new()),
            (Metric::Luminosity, vec![reading("2024-05-01T12:00:00Z", 50.0)]),
            (Metric::Gas, vec![reading("2024-05-01T12:00:00Z", 1200.0)]),
        ],
        actuator: vec![ActuatorReading {
            at: parse_instant("2024-05-01T12:00:08Z").unwrap(),
            state: ActuatorState::On,
        }],
    });
    Arc::new(store)
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/snapshot returns the committed series
// ---------------------------------------------------------------------------

#[tokio::test]
async fn snapshot_returns_seeded_series() {
    let app = common::build_test_app(seeded_store());
    let response = get(app, "/api/v1/snapshot").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["temperature"].as_array().unwrap().len(), 2);
    assert_eq!(json["temperature"][1]["value"], 22.0);
    // Timestamps are serialized in the display timezone (UTC-3).
    let at = json["temperature"][0]["at"].as_str().unwrap();
    assert!(at.starts_with("2024-05-01T09:00:00"), "got {at}");

    assert!(json["humidity"].as_array().unwrap().is_empty());
    assert_eq!(json["actuator"], "on");
    assert!(json["last_refresh"].is_string());
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/status derives bands and colours per metric
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_reflects_latest_readings() {
    let app = common::build_test_app(seeded_store());
    let response = get(app, "/api/v1/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let statuses = json.as_array().unwrap();
    assert_eq!(statuses.len(), 4);

    // Temperature: latest 22.0 is in the comfort band.
    assert_eq!(statuses[0]["metric"], "temperature");
    assert_eq!(statuses[0]["value"], 22.0);
    assert_eq!(statuses[0]["status"], "ideal");
    assert_eq!(statuses[0]["color"], "#008f39");

    // Humidity never got data: renders as zero, which is critical.
    assert_eq!(statuses[1]["metric"], "humidity");
    assert_eq!(statuses[1]["value"], 0.0);
    assert_eq!(statuses[1]["status"], "critico");

    // Gas at 1200 ppm is over the critical line.
    assert_eq!(statuses[3]["metric"], "gas");
    assert_eq!(statuses[3]["status"], "critico");
    assert_eq!(statuses[3]["unit"], "ppm");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/status/{metric} for one metric, 400 for unknown names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn single_metric_status_by_name() {
    let app = common::build_test_app(seeded_store());
    let response = get(app, "/api/v1/status/luminosity").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["metric"], "luminosity");
    assert_eq!(json["value"], 50.0);
    assert_eq!(json["status"], "ideal");
}

#[tokio::test]
async fn unknown_metric_returns_400_with_error_envelope() {
    let app = common::build_test_app(seeded_store());
    let response = get(app, "/api/v1/status/pressure").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;

    assert_eq!(json["code"], "UNKNOWN_METRIC");
    assert!(json["error"].as_str().unwrap().contains("pressure"));
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/actuator distinguishes "no data yet" from "off"
// ---------------------------------------------------------------------------

#[tokio::test]
async fn actuator_state_unknown_before_any_data() {
    let app = common::build_test_app(Arc::new(TelemetryStore::new()));
    let response = get(app, "/api/v1/actuator").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["state"], "unknown");
}

#[tokio::test]
async fn actuator_state_reflects_latest_sample() {
    let app = common::build_test_app(seeded_store());
    let response = get(app, "/api/v1/actuator").await;

    let json = body_json(response).await;
    assert_eq!(json["state"], "on");
}
