//! # stamp-core
//!
//! Codec for the RFC 3339 profile of ISO 8601 — parse and serialize UTC
//! instants with millisecond precision.
//!
//! Three text forms are supported, each with a parse and a serialize
//! operation:
//!
//! - full date-times (`2016-02-01T02:04:10.344Z`, any offset on input,
//!   always `Z` on output)
//! - calendar dates (`2016-02-01`, midnight UTC)
//! - times of day (`02:04:10.344Z`), anchored to "today" when parsed
//!
//! Offsets are resolved to UTC during parsing. Fractional seconds beyond
//! three digits are truncated, never rounded.
//!
//! ## Quick start
//!
//! ```rust
//! use stamp_core::{parse_datetime, serialize_datetime};
//!
//! let instant = parse_datetime("2016-02-01T02:04:10.344+01:00").unwrap();
//! assert_eq!(serialize_datetime(instant), "2016-02-01T01:04:10.344Z");
//! ```
//!
//! ## Modules
//!
//! - [`instant`] — the [`Instant`] type (UTC, millisecond precision)
//! - [`parse`] — text → `Instant`
//! - [`serialize`] — `Instant` → text
//! - [`error`] — error types for parse failures

pub mod error;
pub mod instant;
pub mod parse;
pub mod serialize;

pub use error::ParseError;
pub use instant::Instant;
pub use parse::{parse_date, parse_datetime, parse_time, parse_time_at};
pub use serialize::{serialize_date, serialize_datetime, serialize_time};
