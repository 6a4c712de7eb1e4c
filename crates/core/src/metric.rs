//! Catalogue of tracked sensor metrics and their STH attribute names.
//!
//! These are the canonical attribute names the device firmware registers
//! with the context broker, and therefore the names under which STH-Comet
//! stores their history.

use std::fmt;

use serde::{Deserialize, Serialize};

/// STH attribute name for the temperature sensor (°C).
pub const ATTR_TEMPERATURE: &str = "temperature";

/// STH attribute name for the relative humidity sensor (%).
pub const ATTR_HUMIDITY: &str = "humidity";

/// STH attribute name for the luminosity sensor (% of full scale).
pub const ATTR_LUMINOSITY: &str = "luminosity";

/// STH attribute name for the gas concentration sensor (ppm).
pub const ATTR_GAS: &str = "gas_ppm";

/// STH attribute name for the sound alarm actuator.
///
/// The firmware reports the buzzer relay under this name; it is part of
/// the device's wire contract and cannot be renamed here.
pub const ATTR_ALARM: &str = "led_purples_state";

/// One of the four numeric sensor metrics tracked by the dashboard.
///
/// The alarm actuator is deliberately not a `Metric`: it carries a
/// discrete on/off state, not a classifiable numeric reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Temperature,
    Humidity,
    Luminosity,
    Gas,
}

impl Metric {
    /// All metrics, in the order they are fetched and displayed.
    pub const ALL: [Metric; 4] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Luminosity,
        Metric::Gas,
    ];

    /// The STH attribute name queried for this metric.
    pub fn attribute(self) -> &'static str {
        match self {
            Metric::Temperature => ATTR_TEMPERATURE,
            Metric::Humidity => ATTR_HUMIDITY,
            Metric::Luminosity => ATTR_LUMINOSITY,
            Metric::Gas => ATTR_GAS,
        }
    }

    /// Display unit for readings of this metric.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Luminosity => "%",
            Metric::Gas => "ppm",
        }
    }

    /// Look a metric up by its lowercase name (e.g. a route parameter).
    pub fn from_name(name: &str) -> Option<Metric> {
        match name {
            "temperature" => Some(Metric::Temperature),
            "humidity" => Some(Metric::Humidity),
            "luminosity" => Some(Metric::Luminosity),
            "gas" => Some(Metric::Gas),
            _ => None,
        }
    }

    /// Lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Luminosity => "luminosity",
            Metric::Gas => "gas",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
