//! Read-only telemetry routes consumed by the rendering layer.
//!
//! The renderer polls these on its own cadence; statuses are recomputed
//! from the latest snapshot on every request rather than cached, so they
//! always reflect the freshest value shown.

use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use ambiente_core::series::{ActuatorState, TelemetrySnapshot};
use ambiente_core::{Metric, Status};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Classified status of one metric, derived from the live snapshot.
#[derive(Debug, Serialize)]
pub struct MetricStatus {
    pub metric: Metric,
    /// Latest reading, or `0.0` when no data has ever arrived (the
    /// renderer shows empty metrics as zero).
    pub value: f64,
    pub unit: &'static str,
    pub status: Status,
    /// Panel colour for the status band.
    pub color: &'static str,
}

impl MetricStatus {
    fn derive(snapshot: &TelemetrySnapshot, metric: Metric) -> Self {
        let value = snapshot.latest_value(metric).unwrap_or(0.0);
        let status = snapshot.status(metric);
        Self {
            metric,
            value,
            unit: metric.unit(),
            status,
            color: status.color(),
        }
    }
}

/// Actuator panel payload; `unknown` renders as "no data yet".
#[derive(Debug, Serialize)]
pub struct ActuatorResponse {
    pub state: ActuatorState,
}

/// GET /api/v1/snapshot -- the full telemetry snapshot.
async fn snapshot(State(state): State<AppState>) -> Json<TelemetrySnapshot> {
    Json((*state.store.snapshot()).clone())
}

/// GET /api/v1/status -- classified status of all four metrics.
async fn status_all(State(state): State<AppState>) -> Json<Vec<MetricStatus>> {
    let snapshot = state.store.snapshot();
    let statuses = Metric::ALL
        .iter()
        .map(|&metric| MetricStatus::derive(&snapshot, metric))
        .collect();
    Json(statuses)
}

/// GET /api/v1/status/{metric} -- classified status of one metric.
async fn status_one(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<MetricStatus>> {
    let metric = Metric::from_name(&name).ok_or(AppError::UnknownMetric(name))?;
    let snapshot = state.store.snapshot();
    Ok(Json(MetricStatus::derive(&snapshot, metric)))
}

/// GET /api/v1/actuator -- the alarm actuator's last known state.
async fn actuator(State(state): State<AppState>) -> Json<ActuatorResponse> {
    Json(ActuatorResponse {
        state: state.store.snapshot().actuator,
    })
}

/// Mount the telemetry routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/snapshot", get(snapshot))
        .route("/status", get(status_all))
        .route("/status/{metric}", get(status_one))
        .route("/actuator", get(actuator))
}
