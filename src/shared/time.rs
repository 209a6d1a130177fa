//! Timestamp conversion helpers.
//!
//! Pure, stateless functions converting between date/time strings, `chrono`
//! values, and Unix timestamps in seconds or milliseconds. All calendar math
//! is pinned to UTC so day boundaries do not depend on the host machine's
//! locale and day arithmetic is never distorted by DST transitions.

use crate::error::TimeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::str::FromStr;

// ─── Unit ────────────────────────────────────────────────────────────────────

/// Timestamp unit. The unit is caller-tracked convention: timestamps stay
/// plain `i64` and nothing downstream validates a seconds/milliseconds
/// mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Seconds,
    Milliseconds,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Self::Seconds),
            "ms" => Ok(Self::Milliseconds),
            other => Err(TimeError::InvalidUnit(other.to_string())),
        }
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Date/time string formats accepted by [`time_to_timestamp`], tried in order.
/// The bare-date form comes last so it never shadows a full datetime.
const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.3f",
    "%Y-%m-%dT%H:%M:%S%.3fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S%.3f",
    "%Y-%m-%dT%H:%M:%S",
];

fn in_unit(dt: DateTime<Utc>, unit: Unit) -> i64 {
    match unit {
        Unit::Seconds => dt.timestamp(),
        Unit::Milliseconds => dt.timestamp_millis(),
    }
}

/// Parses a date/time string into a Unix timestamp in the requested unit.
///
/// Naive inputs (no offset) are interpreted as UTC; RFC 3339 inputs with an
/// explicit offset are converted. Sub-unit precision is truncated.
///
/// Fails with [`TimeError::InvalidTimeInput`] when no supported format
/// matches.
pub fn time_to_timestamp(input: &str, unit: Unit) -> Result<i64, TimeError> {
    if input.is_empty() {
        return Err(TimeError::InvalidTimeInput(input.to_string()));
    }

    for format in PARSE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(in_unit(Utc.from_utc_datetime(&naive), unit));
        }
    }

    // RFC 3339 handles explicit timezone offsets.
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(in_unit(dt.with_timezone(&Utc), unit));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let naive = date.and_time(NaiveTime::MIN);
        return Ok(in_unit(Utc.from_utc_datetime(&naive), unit));
    }

    Err(TimeError::InvalidTimeInput(input.to_string()))
}

/// Structured-input variant of [`time_to_timestamp`].
pub fn datetime_to_timestamp(dt: &DateTime<Utc>, unit: Unit) -> i64 {
    in_unit(*dt, unit)
}

/// Formats a Unix timestamp per a `chrono` strftime pattern.
///
/// The unit is taken on faith: passing a millisecond value as `Unit::Seconds`
/// produces a wrong but syntactically valid date. Only timestamps outside
/// chrono's representable range fail.
pub fn timestamp_to_str(ts: i64, fmt: &str, unit: Unit) -> Result<String, TimeError> {
    let dt = match unit {
        Unit::Seconds => DateTime::<Utc>::from_timestamp(ts, 0),
        Unit::Milliseconds => DateTime::<Utc>::from_timestamp_millis(ts),
    }
    .ok_or(TimeError::OutOfRange(ts))?;

    Ok(dt.format(fmt).to_string())
}

/// Current wall-clock time as a Unix timestamp, truncated to the unit.
pub fn current_timestamp(unit: Unit) -> i64 {
    in_unit(Utc::now(), unit)
}

/// Unix timestamp for the start of the current UTC calendar day.
pub fn current_date_timestamp(unit: Unit) -> i64 {
    let midnight = Utc::now().date_naive().and_time(NaiveTime::MIN);
    in_unit(Utc.from_utc_datetime(&midnight), unit)
}

/// Shifts a Unix timestamp by whole days (negative to go back), same unit.
///
/// Days are exact 86 400-second spans under the UTC convention, so
/// sub-second precision of millisecond inputs survives the shift and
/// `add_days_to_timestamp(add_days_to_timestamp(ts, n, u), -n, u) == ts`.
pub fn add_days_to_timestamp(ts: i64, days: i64, unit: Unit) -> i64 {
    let day = match unit {
        Unit::Seconds => 86_400,
        Unit::Milliseconds => 86_400_000,
    };
    ts.saturating_add(days.saturating_mul(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_timestamp_seconds() {
        let ts = time_to_timestamp("2021-06-01 00:00:00", Unit::Seconds).unwrap();
        assert_eq!(ts, 1_622_505_600);
    }

    #[test]
    fn test_time_to_timestamp_millis() {
        let ts = time_to_timestamp("2021-06-01 00:00:00", Unit::Milliseconds).unwrap();
        assert_eq!(ts, 1_622_505_600_000);
    }

    #[test]
    fn test_time_to_timestamp_bare_date() {
        let ts = time_to_timestamp("2021-06-01", Unit::Seconds).unwrap();
        assert_eq!(ts, 1_622_505_600);
    }

    #[test]
    fn test_time_to_timestamp_rfc3339_offset() {
        let ts = time_to_timestamp("2021-06-01T07:00:00+07:00", Unit::Seconds).unwrap();
        assert_eq!(ts, 1_622_505_600);
    }

    #[test]
    fn test_time_to_timestamp_iso_with_millis_truncates() {
        let ts = time_to_timestamp("2021-06-01T00:00:00.789Z", Unit::Seconds).unwrap();
        assert_eq!(ts, 1_622_505_600);
        let ms = time_to_timestamp("2021-06-01T00:00:00.789Z", Unit::Milliseconds).unwrap();
        assert_eq!(ms, 1_622_505_600_789);
    }

    #[test]
    fn test_time_to_timestamp_invalid_input() {
        assert!(matches!(
            time_to_timestamp("not a date", Unit::Seconds),
            Err(TimeError::InvalidTimeInput(_))
        ));
        assert!(time_to_timestamp("", Unit::Seconds).is_err());
    }

    #[test]
    fn test_datetime_to_timestamp() {
        let dt = DateTime::<Utc>::from_timestamp(1_622_505_600, 0).unwrap();
        assert_eq!(datetime_to_timestamp(&dt, Unit::Seconds), 1_622_505_600);
        assert_eq!(datetime_to_timestamp(&dt, Unit::Milliseconds), 1_622_505_600_000);
    }

    #[test]
    fn test_timestamp_to_str() {
        let s = timestamp_to_str(1_622_505_600, "%Y-%m-%d", Unit::Seconds).unwrap();
        assert_eq!(s, "2021-06-01");
        let s = timestamp_to_str(1_622_505_600_000, "%Y-%m-%d %H:%M:%S", Unit::Milliseconds)
            .unwrap();
        assert_eq!(s, "2021-06-01 00:00:00");
    }

    #[test]
    fn test_timestamp_to_str_out_of_range() {
        assert!(matches!(
            timestamp_to_str(i64::MAX, "%Y", Unit::Seconds),
            Err(TimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_format_preserving_round_trip() {
        let ts = time_to_timestamp("2024-01-01 00:00:00", Unit::Seconds).unwrap();
        let s = timestamp_to_str(ts, "%Y-%m-%d %H:%M:%S", Unit::Seconds).unwrap();
        assert_eq!(time_to_timestamp(&s, Unit::Seconds).unwrap(), ts);
    }

    #[test]
    fn test_current_timestamp_units_agree() {
        let s = current_timestamp(Unit::Seconds);
        let ms = current_timestamp(Unit::Milliseconds);
        assert!(s > 1_600_000_000);
        assert!((ms / 1000 - s).abs() <= 1);
    }

    #[test]
    fn test_current_date_timestamp_is_utc_midnight() {
        let s = current_date_timestamp(Unit::Seconds);
        assert_eq!(s % 86_400, 0);
        assert!(s <= current_timestamp(Unit::Seconds));
        assert_eq!(current_date_timestamp(Unit::Milliseconds), s * 1000);
    }

    #[test]
    fn test_add_days_identity() {
        for ts in [0, 1_622_505_600, -1, i64::from(u32::MAX)] {
            assert_eq!(add_days_to_timestamp(ts, 0, Unit::Seconds), ts);
            assert_eq!(add_days_to_timestamp(ts, 0, Unit::Milliseconds), ts);
        }
    }

    #[test]
    fn test_add_days_inverse() {
        let ts = 1_622_505_600;
        let shifted = add_days_to_timestamp(ts, 5, Unit::Seconds);
        assert_eq!(shifted, ts + 5 * 86_400);
        assert_eq!(add_days_to_timestamp(shifted, -5, Unit::Seconds), ts);
    }

    #[test]
    fn test_add_days_preserves_subsecond_millis() {
        let ts = 1_622_505_600_123;
        assert_eq!(
            add_days_to_timestamp(ts, 1, Unit::Milliseconds),
            1_622_592_000_123
        );
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!("s".parse::<Unit>().unwrap(), Unit::Seconds);
        assert_eq!("ms".parse::<Unit>().unwrap(), Unit::Milliseconds);
        assert!(matches!(
            "us".parse::<Unit>(),
            Err(TimeError::InvalidUnit(_))
        ));
    }
}
