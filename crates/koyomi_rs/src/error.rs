//! Error type for the snapshot layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use koyomi_base::BaseError;
use koyomi_time::TimeError;

/// Errors surfaced while building snapshot inputs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KoyomiError {
    /// Timestamp could not be parsed or constructed.
    Time(TimeError),
    /// Observer location or other calculator input was rejected.
    Base(BaseError),
}

impl Display for KoyomiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Base(e) => write!(f, "{e}"),
        }
    }
}

impl Error for KoyomiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Base(e) => Some(e),
        }
    }
}

impl From<TimeError> for KoyomiError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<BaseError> for KoyomiError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}
