//! Integration tests for the lunar date, moon phase and sun times.

use chrono::{Datelike, NaiveDate};
use koyomi_base::{
    DayCondition, GeoLocation, LunarEpoch, MoonPhase, RiseSetConfig, Rokuyo, SYNODIC_MONTH_DAYS,
    classify_moon_phase, compute_lunar_date, compute_solar_longitude, compute_sunrise_sunset,
};
use koyomi_time::JstTime;
use proptest::prelude::*;

// 1950-01-01 .. 2100-01-01 in Unix seconds
const MIN_UNIX: i64 = -631_152_000;
const MAX_UNIX: i64 = 4_102_444_800;

proptest! {
    #[test]
    fn longitude_in_range(secs in MIN_UNIX..MAX_UNIX) {
        let lon = compute_solar_longitude(&JstTime::from_unix_seconds(secs));
        prop_assert!((0.0..360.0).contains(&lon));
    }

    #[test]
    fn lunar_fields_in_range(secs in MIN_UNIX..MAX_UNIX) {
        let d = compute_lunar_date(&JstTime::from_unix_seconds(secs));
        prop_assert!((1..=12).contains(&d.month));
        prop_assert!((1..=30).contains(&d.day));
        prop_assert!((0.0..SYNODIC_MONTH_DAYS).contains(&d.moon_age));
        prop_assert!((0.0..=1.0).contains(&d.illumination()));
    }

    #[test]
    fn moon_phase_is_idempotent(age in 0.0f64..SYNODIC_MONTH_DAYS) {
        prop_assert_eq!(classify_moon_phase(age), classify_moon_phase(age));
    }

    #[test]
    fn lunar_date_is_deterministic(secs in MIN_UNIX..MAX_UNIX) {
        let t = JstTime::from_unix_seconds(secs);
        prop_assert_eq!(compute_lunar_date(&t), compute_lunar_date(&t));
    }
}

#[test]
fn first_day_after_new_moon_2025_12() {
    let t: JstTime = "2025-12-21T12:00:00+09:00".parse().unwrap();
    let d = compute_lunar_date(&t);
    assert_eq!((d.year, d.month, d.day), (2025, 11, 2));
    assert_eq!(d.phase, MoonPhase::NewMoon);
    assert_eq!(d.phase.name(), "新月");
    assert_eq!(d.month_name, "霜月");
    // (11 + 2) % 6 = 1
    assert_eq!(d.rokuyo(), Rokuyo::Shakkou);
    assert!(d.illumination() < 0.02);
}

#[test]
fn moon_age_grows_with_elapsed_days() {
    let epoch = LunarEpoch::reference();
    let later = compute_lunar_date(&epoch.instant.add_days(5.0));
    assert!((later.moon_age - 24.8).abs() < 1e-6);
    assert_eq!(later.phase, MoonPhase::LastQuarter);
}

#[test]
fn okayama_sunrise_before_sunset_all_year() {
    let cfg = RiseSetConfig::default();
    let mut date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    while date.year() == 2025 {
        let t = compute_sunrise_sunset(date, &GeoLocation::OKAYAMA, &cfg);
        assert_eq!(t.condition, DayCondition::Normal, "{date}");
        assert!(t.sunrise < t.sunset, "{date}: {} .. {}", t.sunrise, t.sunset);
        assert!((9.5..14.8).contains(&t.day_length_hours), "{date}: {}", t.day_length_hours);
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn okayama_summer_solstice_and_equinox() {
    let cfg = RiseSetConfig::default();
    let june = compute_sunrise_sunset(
        NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
        &GeoLocation::OKAYAMA,
        &cfg,
    );
    assert_eq!(june.sunrise.to_string(), "04:52");
    assert_eq!(june.sunset.to_string(), "19:20");

    let march = compute_sunrise_sunset(
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        &GeoLocation::OKAYAMA,
        &cfg,
    );
    assert_eq!(march.sunrise.to_string(), "06:08");
    assert_eq!(march.sunset.to_string(), "18:16");
}

#[test]
fn higher_observer_sees_longer_day() {
    let cfg = RiseSetConfig::default();
    let date = NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();
    let sea = compute_sunrise_sunset(date, &GeoLocation::OKAYAMA, &cfg);
    let peak = compute_sunrise_sunset(date, &GeoLocation::new(34.66, 133.94, 1000.0), &cfg);
    assert!(peak.day_length_hours > sea.day_length_hours);
}

#[test]
fn tromso_polar_cases() {
    let loc = GeoLocation::try_new(70.0, 25.0, 0.0).unwrap();
    let cfg = RiseSetConfig {
        timezone_meridian_deg: 15.0,
        ..Default::default()
    };
    let winter = compute_sunrise_sunset(NaiveDate::from_ymd_opt(2025, 12, 21).unwrap(), &loc, &cfg);
    assert_eq!(winter.condition, DayCondition::PolarNight);
    assert_eq!(winter.sunrise, winter.solar_noon);

    let summer = compute_sunrise_sunset(NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(), &loc, &cfg);
    assert_eq!(summer.condition, DayCondition::PolarDay);
    assert_eq!(summer.sunrise.to_string(), "23:22");
}
