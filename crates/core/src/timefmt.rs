//! Timestamp normalization for STH-Comet history records.
//!
//! STH stores `recvTime` as an ISO-8601-like UTC string, with or without
//! fractional seconds. Readings are displayed in the site's civil
//! timezone, so parsing converts every instant to America/Sao_Paulo.

use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Civil timezone all instants are expressed in downstream.
pub const DISPLAY_TZ: Tz = chrono_tz::America::Sao_Paulo;

/// A timezone-aware instant in the display timezone.
pub type Timestamp = chrono::DateTime<Tz>;

/// `recvTime` with microsecond precision, e.g. `2024-05-01T12:00:00.500Z`.
const FORMAT_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// `recvTime` truncated to whole seconds, e.g. `2024-05-01T12:00:00Z`.
const FORMAT_WHOLE: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a raw STH timestamp into a display-timezone instant.
///
/// Tries the fractional-second form first, then falls back to whole
/// seconds. Returns `None` for anything that matches neither; callers
/// drop such records rather than failing the batch.
pub fn parse_instant(raw: &str) -> Option<Timestamp> {
    let naive = NaiveDateTime::parse_from_str(raw, FORMAT_FRACTIONAL)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, FORMAT_WHOLE))
        .ok()?;
    Some(naive.and_utc().with_timezone(&DISPLAY_TZ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
