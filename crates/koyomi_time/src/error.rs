//! Error types for timestamp construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building or parsing a [`crate::JstTime`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input text is not a recognised date/time format.
    Parse(String),
    /// Calendar fields do not form a valid date or time of day.
    InvalidDate(String),
    /// Local wall-clock time does not exist in Asia/Tokyo.
    NonexistentLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "timestamp parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::NonexistentLocalTime(msg) => {
                write!(f, "local time does not exist in Asia/Tokyo: {msg}")
            }
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
