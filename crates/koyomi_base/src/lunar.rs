//! Lunar calendar date and moon age from a fixed reference epoch.
//!
//! Moon age is the elapsed time since a reference instant of known age,
//! reduced modulo the mean synodic month. The lunar year/month/day are
//! carried forward from the reference date by whole synodic months, then
//! the day is renormalized with a fixed 30-day month.
//!
//! The fixed 30-day month is an approximation: real lunar months alternate
//! between 29 and 30 days and leap months are not modelled, so dates drift
//! from the authoritative calendar as the distance from the epoch grows.

use koyomi_time::JstTime;

use crate::error::BaseError;
use crate::moon_phase::{MoonPhase, classify_moon_phase};
use crate::rokuyo::{Rokuyo, rokuyo_for};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// Month length assumed by the day rollover.
pub const DAYS_PER_LUNAR_MONTH: i64 = 30;

/// 2025-12-10 12:00 JST as Unix seconds.
const REFERENCE_UNIX_SECONDS: i64 = 1_765_335_600;

/// Traditional month names, 睦月 (1) .. 師走 (12).
const LUNAR_MONTH_NAMES: [&str; 12] = [
    "睦月", "如月", "弥生", "卯月", "皐月", "水無月", "文月", "葉月", "長月", "神無月", "霜月",
    "師走",
];

/// Zero point for all lunar arithmetic: an instant with a known lunar date
/// and moon age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarEpoch {
    pub instant: JstTime,
    pub year: i32,
    /// Lunar month, 1-12.
    pub month: u32,
    /// Lunar day, 1-30.
    pub day: u32,
    /// Days since new moon at `instant`.
    pub moon_age: f64,
}

impl LunarEpoch {
    /// 2025-12-10 12:00 JST: lunar 2025/10/21, moon age 19.8.
    pub fn reference() -> Self {
        Self {
            instant: JstTime::from_unix_seconds(REFERENCE_UNIX_SECONDS),
            year: 2025,
            month: 10,
            day: 21,
            moon_age: 19.8,
        }
    }

    /// Create an epoch, rejecting fields outside the lunar calendar ranges.
    ///
    /// Month must be 1-12, day 1-30 and `moon_age` finite in
    /// [0, SYNODIC_MONTH_DAYS).
    pub fn try_new(
        instant: JstTime,
        year: i32,
        month: u32,
        day: u32,
        moon_age: f64,
    ) -> Result<Self, BaseError> {
        if !(1..=12).contains(&month) {
            return Err(BaseError::InvalidEpoch("month must be within [1, 12]"));
        }
        if !(1..=DAYS_PER_LUNAR_MONTH as u32).contains(&day) {
            return Err(BaseError::InvalidEpoch("day must be within [1, 30]"));
        }
        if !moon_age.is_finite() || !(0.0..SYNODIC_MONTH_DAYS).contains(&moon_age) {
            return Err(BaseError::InvalidEpoch(
                "moon age must be within [0, synodic month)",
            ));
        }
        Ok(Self {
            instant,
            year,
            month,
            day,
            moon_age,
        })
    }
}

impl Default for LunarEpoch {
    fn default() -> Self {
        Self::reference()
    }
}

/// Lunar calendar date with moon age and phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarDate {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// 1-30.
    pub day: u32,
    /// Days since new moon, [0, SYNODIC_MONTH_DAYS).
    pub moon_age: f64,
    pub phase: MoonPhase,
    /// Traditional name of `month`.
    pub month_name: &'static str,
}

impl LunarDate {
    /// 六曜 for this lunar date.
    pub fn rokuyo(&self) -> Rokuyo {
        rokuyo_for(self.month, self.day)
    }

    /// Illuminated fraction of the disk, [0, 1].
    pub fn illumination(&self) -> f64 {
        moon_illumination(self.moon_age)
    }
}

/// Traditional name of a lunar month (1-12, wrapped).
pub fn lunar_month_name(month: u32) -> &'static str {
    LUNAR_MONTH_NAMES[(month as usize + 11) % 12]
}

/// Move `(year, month)` by `delta` months, rolling the year over at
/// December/January in either direction.
///
/// Out-of-range months are folded the same way (month 13 of one year is
/// January of the next, month 0 is the previous December).
pub fn shift_month(year: i32, month: u32, delta: i64) -> (i32, u32) {
    let total = year as i64 * 12 + month as i64 - 1 + delta;
    (total.div_euclid(12) as i32, (total.rem_euclid(12) + 1) as u32)
}

/// Fold a day count into [1, 30], carrying whole 30-day months into
/// `(year, month)`.
pub fn normalize_day(year: i32, month: u32, day: i64) -> (i32, u32, u32) {
    let carry = (day - 1).div_euclid(DAYS_PER_LUNAR_MONTH);
    let day = (day - 1).rem_euclid(DAYS_PER_LUNAR_MONTH) + 1;
    let (year, month) = shift_month(year, month, carry);
    (year, month, day as u32)
}

/// Reduce days-since-new-moon into [0, SYNODIC_MONTH_DAYS).
pub fn normalize_moon_age(days: f64) -> f64 {
    let age = days.rem_euclid(SYNODIC_MONTH_DAYS);
    if age >= SYNODIC_MONTH_DAYS { 0.0 } else { age }
}

/// Illuminated fraction for a moon age: `(1 - cos(2π·age/S)) / 2`.
pub fn moon_illumination(moon_age: f64) -> f64 {
    let phase_angle = std::f64::consts::TAU * moon_age / SYNODIC_MONTH_DAYS;
    (1.0 - phase_angle.cos()) / 2.0
}

/// Lunar date at `time` against the built-in reference epoch.
pub fn compute_lunar_date(time: &JstTime) -> LunarDate {
    compute_lunar_date_with_epoch(time, &LunarEpoch::reference())
}

/// Lunar date at `time` against an explicit epoch.
pub fn compute_lunar_date_with_epoch(time: &JstTime, epoch: &LunarEpoch) -> LunarDate {
    let elapsed_days = time.days_since(&epoch.instant);
    let since_new_moon = epoch.moon_age + elapsed_days;
    let moon_age = normalize_moon_age(since_new_moon);

    let elapsed_months = (since_new_moon / SYNODIC_MONTH_DAYS).floor() as i64;
    let (year, month) = shift_month(epoch.year, epoch.month, elapsed_months);

    let day_offset = (elapsed_days - elapsed_months as f64 * SYNODIC_MONTH_DAYS).floor() as i64;
    let (year, month, day) = normalize_day(year, month, epoch.day as i64 + day_offset);
    let day = day.min(DAYS_PER_LUNAR_MONTH as u32);

    LunarDate {
        year,
        month,
        day,
        moon_age,
        phase: classify_moon_phase(moon_age),
        month_name: lunar_month_name(month),
    }
}
