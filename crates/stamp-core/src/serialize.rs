//! RFC 3339 serialization — [`Instant`] to text forms.
//!
//! Output is always UTC with the `Z` designator; numeric offsets never
//! appear. Time-of-day forms carry exactly three fractional digits even
//! when the millisecond component is zero. All three functions are total.

use crate::instant::Instant;

/// Serialize an instant as a full RFC 3339 date-time string,
/// `YYYY-MM-DDThh:mm:ss.sssZ`.
pub fn serialize_datetime(instant: Instant) -> String {
    instant
        .as_datetime()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Serialize an instant's UTC calendar date as `YYYY-MM-DD`.
pub fn serialize_date(instant: Instant) -> String {
    instant.as_datetime().format("%Y-%m-%d").to_string()
}

/// Serialize an instant's UTC clock time as `hh:mm:ss.sssZ`.
pub fn serialize_time(instant: Instant) -> String {
    instant.as_datetime().format("%H:%M:%S%.3fZ").to_string()
}
