//! Timestamps pinned to Asia/Tokyo and Julian Day conversions.
//!
//! This crate provides:
//! - `JstTime`, a timezone-aware instant that is always expressed in
//!   Asia/Tokyo (naive input is assigned that zone, never UTC)
//! - Gregorian calendar ↔ Julian Date conversion
//! - Julian centuries since J2000.0 for the solar series

pub mod error;
pub mod jst_time;
pub mod julian;

pub use error::TimeError;
pub use jst_time::JstTime;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
