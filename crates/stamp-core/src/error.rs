//! Error types for timestamp parsing.

use thiserror::Error;

/// Errors produced when a text form cannot be interpreted as an instant.
///
/// Each variant carries the offending input and the reason reported by the
/// underlying datetime parser.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid date string: {0}")]
    Date(String),

    #[error("invalid time string: {0}")]
    Time(String),

    #[error("invalid date-time string: {0}")]
    DateTime(String),
}

/// Convenience alias used throughout stamp-core.
pub type Result<T> = std::result::Result<T, ParseError>;
