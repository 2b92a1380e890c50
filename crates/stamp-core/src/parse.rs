//! RFC 3339 parsing — text forms to [`Instant`].
//!
//! All three parsers resolve offsets to UTC and truncate fractional seconds
//! past millisecond precision (`.12399` keeps 123 ms; no rounding). Short
//! fractions scale up as usual for decimal fractions: `.1` is 100 ms,
//! `.12` is 120 ms.
//!
//! Grammar and field-range validation of date-times is delegated to
//! chrono's RFC 3339 parser: the offset is mandatory (`Z` or `±hh:mm`,
//! at most ±23:59), and calendar-invalid fields are rejected.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{ParseError, Result};
use crate::instant::Instant;

/// Parse a full RFC 3339 date-time string
/// (`YYYY-MM-DDThh:mm:ss[.fraction](Z|±hh:mm)`) into an [`Instant`].
///
/// The offset is resolved away: `2016-02-01T00:00:00-11:00` and
/// `2016-02-01T11:00:00Z` parse to the same instant.
pub fn parse_datetime(text: &str) -> Result<Instant> {
    let dt = DateTime::parse_from_rfc3339(text)
        .map_err(|e| ParseError::DateTime(format!("{text}: {e}")))?;
    Ok(Instant::from_datetime(dt.with_timezone(&Utc)))
}

/// Parse an RFC 3339 full-date string (`YYYY-MM-DD`) into the instant at
/// midnight UTC of that calendar date.
pub fn parse_date(text: &str) -> Result<Instant> {
    // RFC 3339 full-date is exactly ten characters; chrono's %m/%d would
    // also take unpadded fields like "2016-1-1".
    if text.len() != 10 {
        return Err(ParseError::Date(format!("{text}: expected YYYY-MM-DD")));
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| ParseError::Date(format!("{text}: {e}")))?;
    Ok(Instant::from_datetime(date.and_time(NaiveTime::MIN).and_utc()))
}

/// Parse an RFC 3339 time-of-day string (`hh:mm:ss[.fraction](Z|±hh:mm)`)
/// into an [`Instant`] on today's UTC calendar date.
///
/// Reads the system clock once and delegates to [`parse_time_at`]; the
/// result is not deterministic across calendar days. Tests and callers
/// that already hold a "now" should use [`parse_time_at`] directly.
pub fn parse_time(text: &str) -> Result<Instant> {
    parse_time_at(text, Instant::now())
}

/// Parse an RFC 3339 time-of-day string against an explicit "now" anchor.
///
/// The anchor contributes only its UTC calendar date: that date is
/// combined with the time text and the result parsed as a full date-time.
/// The offset applies after the combination, so `00:00:00+01:30` resolves
/// to 22:30 on the *previous* UTC day.
pub fn parse_time_at(text: &str, now: Instant) -> Result<Instant> {
    let today = now.as_datetime().date_naive();
    let combined = format!("{}T{}", today.format("%Y-%m-%d"), text);
    let dt = DateTime::parse_from_rfc3339(&combined)
        .map_err(|e| ParseError::Time(format!("{text}: {e}")))?;
    Ok(Instant::from_datetime(dt.with_timezone(&Utc)))
}
