//! Error types for calendar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing calculator inputs.
///
/// The calculators themselves are total; only input validation fails.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Invalid lunar reference epoch.
    InvalidEpoch(&'static str),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidEpoch(msg) => write!(f, "invalid lunar epoch: {msg}"),
        }
    }
}

impl Error for BaseError {}
