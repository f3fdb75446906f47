//! Timezone-aware instants normalized to Asia/Tokyo.
//!
//! Every calculation in the engine starts from a `JstTime`. Aware input is
//! converted to Tokyo wall-clock time; naive input is *assigned* the Tokyo
//! zone. The Julian Date used by the solar series is always taken from the
//! UTC instant, so the zone only affects calendar fields.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc,
};
use chrono_tz::{Asia::Tokyo, Tz};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// Naive layouts accepted by [`JstTime::from_str`], tried in order.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// An instant expressed in Asia/Tokyo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JstTime {
    inner: DateTime<Tz>,
}

impl JstTime {
    /// The current instant.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Convert an aware datetime in any zone to Tokyo time.
    pub fn from_datetime<Z: TimeZone>(dt: DateTime<Z>) -> Self {
        Self {
            inner: dt.with_timezone(&Tokyo),
        }
    }

    /// Interpret a naive wall-clock time as Tokyo local time.
    ///
    /// Ambiguous times (the 1948–1951 summer-time fold) resolve to the
    /// earlier instant.
    pub fn from_naive(naive: NaiveDateTime) -> Result<Self, TimeError> {
        Tokyo
            .from_local_datetime(&naive)
            .earliest()
            .map(|inner| Self { inner })
            .ok_or_else(|| TimeError::NonexistentLocalTime(naive.to_string()))
    }

    /// Build from Tokyo calendar fields.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .ok_or_else(|| {
                TimeError::InvalidDate(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })?;
        Self::from_naive(naive)
    }

    /// Build from whole seconds since the Unix epoch.
    pub fn from_unix_seconds(secs: i64) -> Self {
        Self::from_datetime(DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(secs))
    }

    /// Underlying Tokyo datetime.
    pub fn as_datetime(&self) -> &DateTime<Tz> {
        &self.inner
    }

    /// The same instant in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.inner.with_timezone(&Utc)
    }

    /// Tokyo calendar date.
    pub fn date_naive(&self) -> NaiveDate {
        self.inner.date_naive()
    }

    /// Tokyo calendar year.
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Tokyo calendar month, 1-12.
    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    /// Tokyo day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Tokyo hour, 0-23.
    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    /// Minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    /// Second, 0-59.
    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    /// Julian Date of this instant on the UTC time scale.
    pub fn to_jd_utc(&self) -> f64 {
        let utc = self.to_utc();
        let seconds = utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 * 1e-9;
        let day_frac = utc.day() as f64 + seconds / SECONDS_PER_DAY;
        calendar_to_jd(utc.year(), utc.month(), day_frac)
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    ///
    /// Resolution is one microsecond.
    pub fn add_days(&self, days: f64) -> Self {
        let micros = (days * SECONDS_PER_DAY * 1e6).round() as i64;
        Self {
            inner: self.inner + TimeDelta::microseconds(micros),
        }
    }

    /// Fractional days from `earlier` to `self` (negative if `self` is earlier).
    pub fn days_since(&self, earlier: &JstTime) -> f64 {
        let delta = self.inner - earlier.inner;
        delta.num_seconds() as f64 / SECONDS_PER_DAY
            + delta.subsec_nanos() as f64 / (SECONDS_PER_DAY * 1e9)
    }
}

impl Display for JstTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner.to_rfc3339())
    }
}

impl FromStr for JstTime {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2025-12-21T12:00:00+09:00`, `...Z`), naive
    /// `YYYY-MM-DDThh:mm[:ss]` read as Tokyo time, or a bare `YYYY-MM-DD`
    /// meaning Tokyo midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(aware) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_datetime(aware));
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Self::from_naive(naive);
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Self::from_naive(date.and_time(chrono::NaiveTime::MIN)),
            Err(_) => Err(TimeError::Parse(format!(
                "expected RFC 3339, YYYY-MM-DDThh:mm[:ss] or YYYY-MM-DD, got {s:?}"
            ))),
        }
    }
}
