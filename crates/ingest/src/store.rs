//! The telemetry store: one live snapshot, swapped atomically on commit.
//!
//! Backed by a `tokio::sync::watch` channel. Readers take a cheap `Arc`
//! clone of the current snapshot and never observe a half-updated set of
//! metrics; the rendering layer can also `subscribe()` to be woken on
//! every commit instead of polling. Single-writer discipline: only the
//! refresh scheduler calls [`TelemetryStore::refresh`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use ambiente_core::metric::Metric;
use ambiente_core::series::{ActuatorReading, MetricSeries, Reading, TelemetrySnapshot};

/// Everything one refresh cycle produced: decoded readings per metric
/// plus the actuator's state history for the window.
#[derive(Debug, Default)]
pub struct CycleData {
    pub metrics: Vec<(Metric, Vec<Reading>)>,
    pub actuator: Vec<ActuatorReading>,
}

impl CycleData {
    /// True when no attribute returned any data this cycle.
    pub fn is_empty(&self) -> bool {
        self.metrics.iter().all(|(_, readings)| readings.is_empty())
            && self.actuator.is_empty()
    }
}

/// Holds the current [`TelemetrySnapshot`] and performs the commit step.
pub struct TelemetryStore {
    tx: watch::Sender<Arc<TelemetrySnapshot>>,
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryStore {
    /// Create a store holding the empty snapshot.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(TelemetrySnapshot::default()));
        Self { tx }
    }

    /// The current snapshot. Never blocks; safe to call concurrently with
    /// an in-flight refresh.
    pub fn snapshot(&self) -> Arc<TelemetrySnapshot> {
        self.tx.borrow().clone()
    }

    /// Subscribe to snapshot changes. The receiver is marked changed on
    /// every commit, so a renderer can await updates instead of polling.
    pub fn subscribe(&self) -> watch::Receiver<Arc<TelemetrySnapshot>> {
        self.tx.subscribe()
    }

    /// Merge one cycle's results into a new snapshot and commit it.
    ///
    /// Per-metric rule: an attribute that returned data replaces its
    /// series wholesale; an attribute that returned nothing keeps the
    /// previous cycle's series. If *no* attribute returned anything the
    /// whole refresh is a no-op, the previous snapshot stands untouched,
    /// and this returns `false`.
    pub fn refresh(&self, cycle: CycleData) -> bool {
        if cycle.is_empty() {
            return false;
        }

        let previous = self.snapshot();
        let mut next = (*previous).clone();

        for (metric, readings) in cycle.metrics {
            if !readings.is_empty() {
                *next.series_mut(metric) = MetricSeries::new(readings);
            }
        }
        if let Some(latest) = cycle.actuator.last() {
            next.actuator = latest.state;
        }
        next.last_refresh = Some(Utc::now());

        // Single atomic swap; readers see either the old or the new
        // snapshot, never a mix.
        self.tx.send_replace(Arc::new(next));
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
