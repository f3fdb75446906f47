//! Types for sunrise/sunset calculations.
//!
//! Provides the observer location, horizon configuration, wall-clock time
//! and result types used by the rise/set module.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

use crate::error::BaseError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Okayama, Japan (34.66 N, 133.94 E).
    pub const OKAYAMA: Self = Self {
        latitude_deg: 34.66,
        longitude_deg: 133.94,
        altitude_m: 0.0,
    };

    /// Create a location without validation.
    pub const fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn try_new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, BaseError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(BaseError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(BaseError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        if !altitude_m.is_finite() {
            return Err(BaseError::InvalidLocation("altitude must be finite"));
        }
        Ok(Self::new(latitude_deg, longitude_deg, altitude_m))
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::OKAYAMA
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip for observer altitude. Default: true.
    pub altitude_correction: bool,
    /// Central meridian of the civil time zone in degrees east.
    /// Default: 135.0 (JST).
    pub timezone_meridian_deg: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
            timezone_meridian_deg: 135.0,
        }
    }
}

impl RiseSetConfig {
    /// Altitude of the Sun's center at rise/set, in degrees (negative).
    ///
    /// `h0 = -((refraction + semidiameter) / 60 + dip_deg)`, which is
    /// -0.8333 deg at sea level with the defaults.
    pub fn horizon_altitude_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        let dip = if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        };
        -(base + dip)
    }

    /// UTC offset of the civil zone in hours.
    pub fn utc_offset_hours(&self) -> f64 {
        self.timezone_meridian_deg / 15.0
    }
}

/// Local wall-clock time to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Round decimal hours to the nearest minute, wrapped into [00:00, 24:00).
    pub fn from_decimal_hours(hours: f64) -> Self {
        let total = ((hours * 60.0).round() as i64).rem_euclid(24 * 60);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }

    /// Minutes since local midnight.
    pub fn minutes_of_day(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Whether the Sun crosses the horizon on the given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCondition {
    /// Sun rises and sets.
    Normal,
    /// Sun stays above the horizon; hour angle clamped to 180 deg.
    PolarDay,
    /// Sun stays below the horizon; hour angle clamped to 0 deg.
    PolarNight,
}

/// Sunrise/sunset for one local day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    /// Local apparent noon.
    pub solar_noon: ClockTime,
    /// Sunrise in decimal local hours (not wrapped).
    pub sunrise_hours: f64,
    /// Sunset in decimal local hours (not wrapped).
    pub sunset_hours: f64,
    /// Hours between sunrise and sunset (0 in polar night, 24 in polar day).
    pub day_length_hours: f64,
    /// Solar declination at local noon, degrees.
    pub declination_deg: f64,
    /// Apparent minus mean solar time, minutes.
    pub equation_of_time_min: f64,
    pub condition: DayCondition,
}
