//! Domain types for the environmental telemetry backend.
//!
//! Pure logic only -- no network, no clocks, no global state. The ingest
//! and API crates build on the metric catalogue, the classification band
//! tables, the reading/snapshot model, and the timestamp normalizer
//! defined here.

pub mod classify;
pub mod metric;
pub mod series;
pub mod timefmt;

pub use classify::{classify, Status};
pub use metric::Metric;
pub use series::{ActuatorReading, ActuatorState, MetricSeries, Reading, TelemetrySnapshot};
pub use timefmt::Timestamp;
