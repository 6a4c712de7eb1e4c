//! Timer-driven refresh scheduler.
//!
//! One cycle = fetch the five attribute histories concurrently, decode
//! them, and commit the merge to the [`TelemetryStore`]. Cycles are
//! strictly serialized: the loop awaits the cycle inline and the interval
//! skips missed ticks, so there is never more than one cycle in flight.
//! A failed attribute fetch degrades to zero readings for that cycle and
//! heals by itself on the next tick if the source recovers.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use ambiente_core::metric::{Metric, ATTR_ALARM};
use ambiente_core::series::{ActuatorReading, Reading};
use ambiente_sth::records;
use ambiente_sth::SampleSource;

use crate::store::{CycleData, TelemetryStore};

/// Refresh cadence and history window.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Time between refresh cycles.
    pub interval: Duration,
    /// How many samples to request per attribute (`lastN`).
    pub window: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(8),
            window: 20,
        }
    }
}

/// Run the refresh loop until `cancel` is triggered.
///
/// The first cycle runs immediately; subsequent cycles fire on the
/// configured interval.
pub async fn run<S: SampleSource>(
    source: S,
    store: Arc<TelemetryStore>,
    config: SchedulerConfig,
    cancel: CancellationToken,
) {
    tracing::info!(
        interval_secs = config.interval.as_secs(),
        window = config.window,
        "Telemetry refresh scheduler started"
    );

    let mut ticker = tokio::time::interval(config.interval);
    // A cycle slower than the interval skips the ticks it missed instead
    // of firing a burst of back-to-back cycles afterwards.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Telemetry refresh scheduler stopping");
                break;
            }
            _ = ticker.tick() => {
                run_cycle(&source, &store, config.window).await;
            }
        }
    }
}

/// Execute a single fetch/decode/commit cycle.
///
/// The five fetches run concurrently, so cycle latency is bounded by the
/// slowest fetch (itself capped by the client's per-request timeout).
/// Returns whether a new snapshot was committed.
pub async fn run_cycle<S: SampleSource>(
    source: &S,
    store: &TelemetryStore,
    window: u32,
) -> bool {
    let metric_fetches = Metric::ALL.map(|metric| async move {
        (metric, fetch_metric(source, metric, window).await)
    });

    let (metrics, actuator) =
        tokio::join!(join_all(metric_fetches), fetch_actuator(source, window));

    let committed = store.refresh(CycleData { metrics, actuator });
    if committed {
        tracing::debug!("Refresh cycle committed a new snapshot");
    } else {
        tracing::debug!("No attribute returned data; previous snapshot kept");
    }
    committed
}

/// Fetch and decode one numeric attribute, degrading any failure to an
/// empty reading set.
async fn fetch_metric<S: SampleSource>(source: &S, metric: Metric, window: u32) -> Vec<Reading> {
    match source.fetch(metric.attribute(), window).await {
        Ok(samples) => records::decode_numeric(&samples),
        Err(e) => {
            tracing::warn!(
                attribute = metric.attribute(),
                error = %e,
                "Attribute fetch failed; treating as empty for this cycle"
            );
            Vec::new()
        }
    }
}

/// Fetch and decode the actuator history, same degradation policy.
async fn fetch_actuator<S: SampleSource>(source: &S, window: u32) -> Vec<ActuatorReading> {
    match source.fetch(ATTR_ALARM, window).await {
        Ok(samples) => records::decode_actuator(&samples),
        Err(e) => {
            tracing::warn!(
                attribute = ATTR_ALARM,
                error = %e,
                "Actuator fetch failed; treating as empty for this cycle"
            );
            Vec::new()
        }
    }
}
