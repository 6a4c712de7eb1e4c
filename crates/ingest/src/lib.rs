//! Telemetry ingestion: the snapshot store and the timer-driven refresh
//! scheduler.
//!
//! The [`store::TelemetryStore`] owns the single live
//! [`TelemetrySnapshot`](ambiente_core::TelemetrySnapshot) and swaps it
//! atomically; [`scheduler::run`] drives fetch/decode/commit cycles on a
//! fixed interval, tolerating partial failures.

pub mod scheduler;
pub mod store;

pub use scheduler::SchedulerConfig;
pub use store::{CycleData, TelemetryStore};
