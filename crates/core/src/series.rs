//! In-memory time-series model: readings, per-metric series, actuator
//! state, and the atomically-published telemetry snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, Status};
use crate::metric::Metric;
use crate::timefmt::Timestamp;

/// One timestamped sensor reading. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// When STH recorded the sample, in the display timezone.
    pub at: Timestamp,
    /// The sampled value, in the metric's unit.
    pub value: f64,
}

/// Ordered readings for one metric, in source order.
///
/// STH always returns the full last-N window, so a series is replaced
/// wholesale on refresh, never appended to. Its length is therefore
/// bounded by the configured window by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricSeries(Vec<Reading>);

impl MetricSeries {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self(readings)
    }

    pub fn readings(&self) -> &[Reading] {
        &self.0
    }

    /// The newest reading, i.e. the last one the source returned.
    pub fn latest(&self) -> Option<&Reading> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Last known state of the sound alarm actuator.
///
/// `Unknown` means no state has ever been received; the renderer shows it
/// as a distinct "no data yet" panel, not as `Off`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActuatorState {
    On,
    Off,
    #[default]
    Unknown,
}

impl ActuatorState {
    /// Map a wire value to a state. Anything other than `on`/`off`
    /// (case-insensitive) is unrecognized and the record is dropped.
    pub fn from_wire(raw: &str) -> Option<ActuatorState> {
        if raw.eq_ignore_ascii_case("on") {
            Some(ActuatorState::On)
        } else if raw.eq_ignore_ascii_case("off") {
            Some(ActuatorState::Off)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActuatorState::On => "on",
            ActuatorState::Off => "off",
            ActuatorState::Unknown => "unknown",
        }
    }
}

/// One timestamped actuator state change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActuatorReading {
    pub at: Timestamp,
    pub state: ActuatorState,
}

/// The complete, internally consistent picture published to readers.
///
/// Exactly one snapshot is live at any time; the store replaces it as a
/// whole, so a reader never sees a torn mix of old and new series.
/// `Default` is the empty snapshot the process starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub temperature: MetricSeries,
    pub humidity: MetricSeries,
    pub luminosity: MetricSeries,
    pub gas: MetricSeries,
    /// Latest actuator state; `Unknown` until the first sample arrives.
    pub actuator: ActuatorState,
    /// When the last refresh committed, `None` before the first commit.
    pub last_refresh: Option<DateTime<Utc>>,
}

impl TelemetrySnapshot {
    pub fn series(&self, metric: Metric) -> &MetricSeries {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Humidity => &self.humidity,
            Metric::Luminosity => &self.luminosity,
            Metric::Gas => &self.gas,
        }
    }

    pub fn series_mut(&mut self, metric: Metric) -> &mut MetricSeries {
        match metric {
            Metric::Temperature => &mut self.temperature,
            Metric::Humidity => &mut self.humidity,
            Metric::Luminosity => &mut self.luminosity,
            Metric::Gas => &mut self.gas,
        }
    }

    /// Newest value for `metric`, if any has ever arrived.
    pub fn latest_value(&self, metric: Metric) -> Option<f64> {
        self.series(metric).latest().map(|r| r.value)
    }

    /// Status band for `metric`, recomputed from the newest reading.
    ///
    /// A metric with no data yet renders as zero, so it classifies `0.0`,
    /// exactly what the dashboard displays for it.
    pub fn status(&self, metric: Metric) -> Status {
        classify(metric, self.latest_value(metric).unwrap_or(0.0))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timefmt::parse_instant;

    fn reading(ts: &str, value: f64) -> Reading {
        Reading {
            at: parse_instant(ts).expect("test timestamp"),
            value,
        }
    }

    #[test]
    fn latest_is_last_in_source_order() {
        let series = MetricSeries::new(vec![
            reading("2024-05-01T12:00:00Z", 20.0),
            reading("2024-05-01T12:00:08Z", 22.5),
        ]);
        assert_eq!(series.latest().unwrap().value, 22.5);
    }

    #[test]
    fn empty_snapshot_classifies_zero() {
        let snapshot = TelemetrySnapshot::default();
        assert_eq!(snapshot.latest_value(Metric::Temperature), None);
        // Zero is below every lower bound except gas.
        assert_eq!(snapshot.status(Metric::Temperature), Status::Critico);
        assert_eq!(snapshot.status(Metric::Humidity), Status::Critico);
        assert_eq!(snapshot.status(Metric::Luminosity), Status::Critico);
        assert_eq!(snapshot.status(Metric::Gas), Status::Ideal);
    }

    #[test]
    fn status_tracks_latest_reading() {
        let mut snapshot = TelemetrySnapshot::default();
        *snapshot.series_mut(Metric::Temperature) =
            MetricSeries::new(vec![reading("2024-05-01T12:00:00Z", 22.0)]);
        assert_eq!(snapshot.status(Metric::Temperature), Status::Ideal);
    }

    #[test]
    fn actuator_wire_mapping() {
        assert_eq!(ActuatorState::from_wire("on"), Some(ActuatorState::On));
        assert_eq!(ActuatorState::from_wire("OFF"), Some(ActuatorState::Off));
        assert_eq!(ActuatorState::from_wire("blinking"), None);
        assert_eq!(ActuatorState::default(), ActuatorState::Unknown);
    }

    #[test]
    fn snapshot_serializes_series_as_arrays() {
        let mut snapshot = TelemetrySnapshot::default();
        *snapshot.series_mut(Metric::Gas) =
            MetricSeries::new(vec![reading("2024-05-01T12:00:00Z", 150.0)]);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["gas"][0]["value"], 150.0);
        assert_eq!(json["actuator"], "unknown");
        assert!(json["last_refresh"].is_null());
    }
}
