//! Wire format of STH-Comet history responses and decoding into domain
//! readings.
//!
//! The interesting shape is
//! `contextResponses[0].contextElement.attributes[0].values[]`, where each
//! value carries `recvTime` and `attrValue`. Both fields are optional on
//! the wire, and either may fail to parse. Decoding keeps the two fields
//! paired at the record level: a record that loses either field is dropped
//! whole, so timestamps and values can never drift out of alignment.

use serde::Deserialize;

use ambiente_core::series::{ActuatorReading, ActuatorState, Reading};
use ambiente_core::timefmt;

/// One raw history record as STH returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSample {
    /// Timestamp string, UTC, with or without fractional seconds.
    #[serde(default, rename = "recvTime")]
    pub recv_time: Option<String>,
    /// String-encoded number for sensors, `on`/`off` for the actuator.
    /// Some broker versions notify plain JSON numbers, so both are accepted.
    #[serde(default, rename = "attrValue")]
    pub attr_value: Option<serde_json::Value>,
}

impl RawSample {
    /// Convenience constructor for tests and fakes.
    pub fn new(recv_time: impl Into<String>, attr_value: impl Into<serde_json::Value>) -> Self {
        Self {
            recv_time: Some(recv_time.into()),
            attr_value: Some(attr_value.into()),
        }
    }
}

/// Top-level STH history response.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryResponse {
    #[serde(default, rename = "contextResponses")]
    context_responses: Vec<ContextResponse>,
}

#[derive(Debug, Deserialize)]
struct ContextResponse {
    #[serde(rename = "contextElement")]
    context_element: ContextElement,
}

#[derive(Debug, Deserialize)]
struct ContextElement {
    #[serde(default)]
    attributes: Vec<AttributeHistory>,
}

#[derive(Debug, Deserialize)]
struct AttributeHistory {
    #[serde(default)]
    values: Vec<RawSample>,
}

impl HistoryResponse {
    /// Extract the raw samples of the first attribute of the first context
    /// element, in the order the source returned them.
    ///
    /// A response without any of those levels is a valid "no data"
    /// answer and yields an empty vec.
    pub fn into_samples(self) -> Vec<RawSample> {
        self.context_responses
            .into_iter()
            .next()
            .and_then(|r| r.context_element.attributes.into_iter().next())
            .map(|a| a.values)
            .unwrap_or_default()
    }
}

/// Decode numeric-metric samples into readings.
///
/// A record is dropped when its timestamp is missing or malformed, or its
/// value is missing or not a number. The rest of the batch is unaffected.
pub fn decode_numeric(samples: &[RawSample]) -> Vec<Reading> {
    samples
        .iter()
        .filter_map(|sample| {
            let at = timefmt::parse_instant(sample.recv_time.as_deref()?)?;
            let value = numeric_value(sample.attr_value.as_ref()?)?;
            Some(Reading { at, value })
        })
        .collect()
}

/// Decode actuator samples into timestamped on/off states.
///
/// Same per-record drop policy as [`decode_numeric`]; states other than
/// `on`/`off` are unrecognized and dropped.
pub fn decode_actuator(samples: &[RawSample]) -> Vec<ActuatorReading> {
    samples
        .iter()
        .filter_map(|sample| {
            let at = timefmt::parse_instant(sample.recv_time.as_deref()?)?;
            let raw = sample.attr_value.as_ref()?.as_str()?;
            let state = ActuatorState::from_wire(raw)?;
            Some(ActuatorReading { at, state })
        })
        .collect()
}

/// STH encodes readings as strings; some notification paths produce JSON
/// numbers instead. Accept both.
fn numeric_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
