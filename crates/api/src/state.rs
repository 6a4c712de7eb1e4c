use std::sync::Arc;

use ambiente_ingest::TelemetryStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The live telemetry store, written by the refresh scheduler.
    pub store: Arc<TelemetryStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
