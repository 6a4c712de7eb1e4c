//! Status classification for sensor readings.
//!
//! Pure logic -- no I/O. Each metric carries a declarative band table: an
//! inclusive *ideal* interval nested inside an inclusive *acceptable*
//! interval. A reading inside the ideal interval is `Ideal`, inside the
//! acceptable interval but outside the ideal one is `Moderado`, and
//! anything else is `Critico`. The tables mirror the thresholds burned
//! into the device firmware, so the dashboard and the alarm always agree.

use serde::Serialize;

use crate::metric::Metric;

/// Status band for a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Reading is inside the comfort interval.
    Ideal,
    /// Reading is outside the comfort interval but still acceptable.
    Moderado,
    /// Reading is outside the acceptable interval.
    Critico,
}

impl Status {
    /// Panel colour for this band (hex RGB), used by the rendering layer.
    pub fn color(self) -> &'static str {
        match self {
            Status::Ideal => "#008f39",
            Status::Moderado => "#b38f00",
            Status::Critico => "#8B0000",
        }
    }

    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ideal => "ideal",
            Status::Moderado => "moderado",
            Status::Critico => "critico",
        }
    }
}

/// Inclusive value bands for one metric.
///
/// Invariant: `ideal` is contained in `acceptable`.
#[derive(Debug, Clone, Copy)]
pub struct StatusBands {
    /// Inclusive `(low, high)` bounds of the comfort interval.
    pub ideal: (f64, f64),
    /// Inclusive `(low, high)` bounds of the acceptable interval.
    pub acceptable: (f64, f64),
}

impl StatusBands {
    /// Classify a reading against these bands.
    ///
    /// Total over all `f64` inputs: any value that fits neither interval
    /// (including NaN, which fits no interval) is `Critico`.
    pub fn classify(&self, value: f64) -> Status {
        if contains(self.ideal, value) {
            Status::Ideal
        } else if contains(self.acceptable, value) {
            Status::Moderado
        } else {
            Status::Critico
        }
    }
}

fn contains((low, high): (f64, f64), value: f64) -> bool {
    value >= low && value <= high
}

/// Comfort 21-24 °C, acceptable 18-27 °C.
const TEMPERATURE_BANDS: StatusBands = StatusBands {
    ideal: (21.0, 24.0),
    acceptable: (18.0, 27.0),
};

/// Comfort 45-60 %, acceptable 35-70 %.
const HUMIDITY_BANDS: StatusBands = StatusBands {
    ideal: (45.0, 60.0),
    acceptable: (35.0, 70.0),
};

/// Comfort 40-60 %, acceptable 25-75 %.
const LUMINOSITY_BANDS: StatusBands = StatusBands {
    ideal: (40.0, 60.0),
    acceptable: (25.0, 75.0),
};

/// Gas has no lower limit: clean air up to 300 ppm, tolerable up to 1000 ppm.
const GAS_BANDS: StatusBands = StatusBands {
    ideal: (f64::NEG_INFINITY, 300.0),
    acceptable: (f64::NEG_INFINITY, 1000.0),
};

/// Band table for a metric.
pub fn bands(metric: Metric) -> StatusBands {
    match metric {
        Metric::Temperature => TEMPERATURE_BANDS,
        Metric::Humidity => HUMIDITY_BANDS,
        Metric::Luminosity => LUMINOSITY_BANDS,
        Metric::Gas => GAS_BANDS,
    }
}

/// Classify a reading of `metric`.
pub fn classify(metric: Metric, value: f64) -> Status {
    bands(metric).classify(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
