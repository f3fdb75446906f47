//! Sunrise/sunset from the solar series at a fixed observer.
//!
//! Declination and right ascension come from the apparent solar longitude
//! and the obliquity of the ecliptic. The equation of time is the gap
//! between the mean longitude and the true right ascension (Meeus ch. 28).
//! Rise and set are placed symmetrically about local apparent noon using
//! the hour angle at the configured horizon altitude.

use chrono::{Datelike, NaiveDate};
use koyomi_time::{calendar_to_jd, jd_to_centuries};

use crate::riseset_types::{ClockTime, DayCondition, GeoLocation, RiseSetConfig, SunTimes};
use crate::solar_longitude::{SolarPosition, solar_position};
use crate::util::{normalize_360, normalize_pm180};

/// Aberration constant subtracted from the mean longitude in the equation
/// of time, degrees.
const EOT_ABERRATION_DEG: f64 = 0.005_718_3;

/// The Sun's equatorial position at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEquatorial {
    /// Apparent right ascension, degrees in [0, 360).
    pub right_ascension_deg: f64,
    /// Apparent declination, degrees.
    pub declination_deg: f64,
    /// Equation of time (apparent minus mean solar time), minutes.
    pub equation_of_time_min: f64,
}

/// Obliquity of the ecliptic in degrees: mean value with its secular
/// decrease plus the principal nutation term.
pub fn obliquity_deg(pos: &SolarPosition) -> f64 {
    let t = pos.t_centuries;
    23.439_291 - 0.013_004_2 * t + 0.002_56 * pos.omega_deg.to_radians().cos()
}

/// Equatorial coordinates and equation of time at a Julian Date.
pub fn sun_equatorial(jd: f64) -> SunEquatorial {
    let pos = solar_position(jd_to_centuries(jd));
    let lambda = pos.apparent_longitude_deg().to_radians();
    let eps = obliquity_deg(&pos).to_radians();

    let ra = normalize_360((eps.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees());
    let dec = (eps.sin() * lambda.sin()).asin().to_degrees();
    let eot_deg = normalize_pm180(pos.mean_longitude_deg - EOT_ABERRATION_DEG - ra);

    SunEquatorial {
        right_ascension_deg: ra,
        declination_deg: dec,
        equation_of_time_min: 4.0 * eot_deg,
    }
}

/// Solar declination in degrees at a Julian Date.
pub fn solar_declination_deg(jd: f64) -> f64 {
    sun_equatorial(jd).declination_deg
}

/// Equation of time in minutes at a Julian Date.
pub fn equation_of_time_min(jd: f64) -> f64 {
    sun_equatorial(jd).equation_of_time_min
}

/// Hour angle of the Sun's center at `horizon_altitude_deg`.
///
/// `cos(H) = (sin(h0) - sin(φ) sin(δ)) / (cos(φ) cos(δ))`. When the cosine
/// leaves [-1, 1] the Sun never reaches the horizon: H is clamped to 0 deg
/// (polar night) or 180 deg (polar day).
pub fn hour_angle_deg(
    latitude_deg: f64,
    declination_deg: f64,
    horizon_altitude_deg: f64,
) -> (f64, DayCondition) {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let cos_h = (horizon_altitude_deg.to_radians().sin() - phi.sin() * dec.sin())
        / (phi.cos() * dec.cos());

    if cos_h > 1.0 {
        (0.0, DayCondition::PolarNight)
    } else if cos_h < -1.0 {
        (180.0, DayCondition::PolarDay)
    } else {
        (cos_h.acos().to_degrees(), DayCondition::Normal)
    }
}

/// Local apparent noon in decimal zone hours.
///
/// `noon = 12 + (zone_meridian - longitude) / 15 - EoT / 60`
pub fn solar_noon_hours(longitude_deg: f64, timezone_meridian_deg: f64, eot_min: f64) -> f64 {
    12.0 + (timezone_meridian_deg - longitude_deg) / 15.0 - eot_min / 60.0
}

/// Julian Date (UTC) of 12:00 zone time on `date`.
pub fn zone_noon_jd(date: NaiveDate, config: &RiseSetConfig) -> f64 {
    let day_frac = date.day() as f64 + (12.0 - config.utc_offset_hours()) / 24.0;
    calendar_to_jd(date.year(), date.month(), day_frac)
}

/// Sunrise and sunset on a local calendar date.
///
/// The solar position is evaluated once, at 12:00 zone time.
pub fn compute_sunrise_sunset(
    date: NaiveDate,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> SunTimes {
    let sun = sun_equatorial(zone_noon_jd(date, config));
    let h0 = config.horizon_altitude_deg(location.altitude_m);
    let (hour_angle, condition) = hour_angle_deg(location.latitude_deg, sun.declination_deg, h0);

    let noon = solar_noon_hours(
        location.longitude_deg,
        config.timezone_meridian_deg,
        sun.equation_of_time_min,
    );
    let half_day = hour_angle / 15.0;
    let sunrise_hours = noon - half_day;
    let sunset_hours = noon + half_day;

    SunTimes {
        sunrise: ClockTime::from_decimal_hours(sunrise_hours),
        sunset: ClockTime::from_decimal_hours(sunset_hours),
        solar_noon: ClockTime::from_decimal_hours(noon),
        sunrise_hours,
        sunset_hours,
        day_length_hours: 2.0 * half_day,
        declination_deg: sun.declination_deg,
        equation_of_time_min: sun.equation_of_time_min,
        condition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zone_noon_is_0300_utc_for_jst() {
        let jd = zone_noon_jd(date(2000, 1, 1), &RiseSetConfig::default());
        assert!((jd - (2_451_545.0 - 9.0 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn declination_at_solstices() {
        let cfg = RiseSetConfig::default();
        let winter = solar_declination_deg(zone_noon_jd(date(2025, 12, 21), &cfg));
        let summer = solar_declination_deg(zone_noon_jd(date(2025, 6, 21), &cfg));
        assert!((winter + 23.44).abs() < 0.01, "winter dec = {winter}");
        assert!((summer - 23.44).abs() < 0.01, "summer dec = {summer}");
    }

    #[test]
    fn equation_of_time_extremes() {
        let cfg = RiseSetConfig::default();
        let nov = equation_of_time_min(zone_noon_jd(date(2025, 11, 3), &cfg));
        let feb = equation_of_time_min(zone_noon_jd(date(2025, 2, 11), &cfg));
        assert!((nov - 16.4).abs() < 0.2, "early November EoT = {nov}");
        assert!((feb + 14.2).abs() < 0.2, "mid February EoT = {feb}");
    }

    #[test]
    fn hour_angle_equator_equinox() {
        // sin(-0.8333 deg) / 1 = -0.01454 → H just over 90 deg
        let (h, cond) = hour_angle_deg(0.0, 0.0, -0.8333);
        assert_eq!(cond, DayCondition::Normal);
        assert!((h - 90.833).abs() < 0.01, "H = {h}");
    }

    #[test]
    fn hour_angle_clamps_polar() {
        assert_eq!(hour_angle_deg(70.0, -23.44, -0.8333), (0.0, DayCondition::PolarNight));
        assert_eq!(hour_angle_deg(70.0, 23.44, -0.8333), (180.0, DayCondition::PolarDay));
    }

    #[test]
    fn solar_noon_offsets() {
        // On the zone meridian with no EoT, noon is exactly 12:00
        assert_eq!(solar_noon_hours(135.0, 135.0, 0.0), 12.0);
        // 1.06 deg west of the meridian adds ~4.24 minutes
        let noon = solar_noon_hours(133.94, 135.0, 0.0);
        assert!((noon - 12.0707).abs() < 1e-3);
    }

    #[test]
    fn okayama_winter_solstice() {
        let t = compute_sunrise_sunset(
            date(2025, 12, 21),
            &GeoLocation::OKAYAMA,
            &RiseSetConfig::default(),
        );
        assert_eq!(t.condition, DayCondition::Normal);
        assert_eq!(t.sunrise.to_string(), "07:07");
        assert_eq!(t.sunset.to_string(), "16:57");
        assert!((t.day_length_hours - 9.83).abs() < 0.02);
    }

    #[test]
    fn polar_night_collapses_to_noon() {
        let loc = GeoLocation::new(70.0, 25.0, 0.0);
        let cfg = RiseSetConfig {
            timezone_meridian_deg: 15.0,
            ..Default::default()
        };
        let t = compute_sunrise_sunset(date(2025, 12, 21), &loc, &cfg);
        assert_eq!(t.condition, DayCondition::PolarNight);
        assert_eq!(t.sunrise, t.sunset);
        assert_eq!(t.day_length_hours, 0.0);
    }

    #[test]
    fn polar_day_spans_whole_day() {
        let loc = GeoLocation::new(70.0, 25.0, 0.0);
        let cfg = RiseSetConfig {
            timezone_meridian_deg: 15.0,
            ..Default::default()
        };
        let t = compute_sunrise_sunset(date(2025, 6, 21), &loc, &cfg);
        assert_eq!(t.condition, DayCondition::PolarDay);
        assert_eq!(t.day_length_hours, 24.0);
        assert!(t.sunrise_hours < 0.0, "unwrapped sunrise {}", t.sunrise_hours);
    }
}
