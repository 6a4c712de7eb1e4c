use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// When the last refresh cycle committed, `null` before the first.
    pub last_refresh: Option<DateTime<Utc>>,
}

/// GET /health -- returns service health and snapshot freshness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.store.snapshot();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        last_refresh: snapshot.last_refresh,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
