pub mod health;
pub mod telemetry;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /snapshot              full telemetry snapshot
/// /status                status of all four metrics
/// /status/{metric}       status of one metric
/// /actuator              alarm actuator panel state
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(telemetry::router())
}
