//! The [`Instant`] type — an absolute point in time, UTC, millisecond
//! precision.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::parse::parse_datetime;
use crate::serialize::serialize_datetime;

/// An absolute point in time, normalized to UTC, with millisecond
/// precision.
///
/// Sub-millisecond precision is truncated at construction, so equality is
/// exactly millisecond equality: two `Instant`s with the same millisecond
/// value compare equal.
///
/// `Instant` implements `Display` and `Serialize` as RFC 3339 date-time
/// strings (`2016-02-01T02:04:10.344Z`), and `FromStr`/`Deserialize` from
/// the same form with any offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// 1970-01-01T00:00:00.000Z.
    pub const UNIX_EPOCH: Instant = Instant(DateTime::UNIX_EPOCH);

    /// The current wall-clock time, truncated to millisecond precision.
    pub fn now() -> Instant {
        Instant::from_datetime(Utc::now())
    }

    /// Build an `Instant` from a UTC datetime, truncating any
    /// sub-millisecond precision.
    pub fn from_datetime(dt: DateTime<Utc>) -> Instant {
        let sub_ms_nanos = dt.timestamp_subsec_nanos() % 1_000_000;
        Instant(dt - TimeDelta::nanoseconds(i64::from(sub_ms_nanos)))
    }

    /// Build an `Instant` from milliseconds since the Unix epoch.
    ///
    /// Returns `None` when the value falls outside the representable
    /// datetime range (roughly ±262,000 years from the common era).
    pub fn from_millis(millis: i64) -> Option<Instant> {
        DateTime::from_timestamp_millis(millis).map(Instant)
    }

    /// Milliseconds since the Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The underlying UTC datetime.
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_datetime(*self))
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_datetime(s)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Instant {
        Instant::from_datetime(dt)
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
