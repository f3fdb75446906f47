//! One-shot aggregation of every calendar quantity for an instant.

use koyomi_base::{
    GeoLocation, KouInfo, KouScheme, LunarDate, LunarEpoch, RiseSetConfig, Rokuyo, SekkiInfo,
    SolarLongitudeModel, SunTimes, classify_micro_season, classify_solar_term,
    compute_lunar_date_with_epoch, compute_sunrise_sunset, solar_longitude_deg,
};
use koyomi_time::JstTime;

use crate::error::KoyomiError;

/// Inputs that stay fixed across snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotConfig {
    /// Observer for sunrise/sunset.
    pub location: GeoLocation,
    pub rise_set: RiseSetConfig,
    /// Micro-season anchor table.
    pub kou_scheme: KouScheme,
    pub longitude_model: SolarLongitudeModel,
    /// Zero point for lunar date arithmetic.
    pub epoch: LunarEpoch,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            location: GeoLocation::OKAYAMA,
            rise_set: RiseSetConfig::default(),
            kou_scheme: KouScheme::Longitude,
            longitude_model: SolarLongitudeModel::Apparent,
            epoch: LunarEpoch::reference(),
        }
    }
}

impl SnapshotConfig {
    /// Default configuration at a validated observer location.
    pub fn at_location(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, KoyomiError> {
        Ok(Self {
            location: GeoLocation::try_new(latitude_deg, longitude_deg, altitude_m)?,
            ..Self::default()
        })
    }
}

/// Every derived calendar quantity for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarSnapshot {
    pub timestamp: JstTime,
    /// Julian Date of `timestamp` on the UTC scale.
    pub julian_day: f64,
    pub solar_longitude_deg: f64,
    pub solar_term: SekkiInfo,
    pub micro_season: KouInfo,
    pub lunar_date: LunarDate,
    pub rokuyo: Rokuyo,
    /// Illuminated fraction of the Moon, [0, 1].
    pub moon_illumination: f64,
    /// Sun times for the Tokyo calendar date of `timestamp`.
    pub sun_times: SunTimes,
}

/// Compute a snapshot at `time`.
pub fn compute_snapshot(time: &JstTime, config: &SnapshotConfig) -> CalendarSnapshot {
    let julian_day = time.to_jd_utc();
    let lon = solar_longitude_deg(julian_day, config.longitude_model);
    let date = time.date_naive();

    let solar_term = classify_solar_term(lon);
    let micro_season = classify_micro_season(config.kou_scheme, lon, date);
    let lunar_date = compute_lunar_date_with_epoch(time, &config.epoch);
    let sun_times = compute_sunrise_sunset(date, &config.location, &config.rise_set);

    tracing::debug!(
        timestamp = %time,
        longitude = lon,
        term = solar_term.sekki.name(),
        kou = micro_season.kou.name,
        moon_age = lunar_date.moon_age,
        "computed calendar snapshot"
    );

    CalendarSnapshot {
        timestamp: *time,
        julian_day,
        solar_longitude_deg: lon,
        solar_term,
        micro_season,
        lunar_date,
        rokuyo: lunar_date.rokuyo(),
        moon_illumination: lunar_date.illumination(),
        sun_times,
    }
}

/// Snapshot at the current wall-clock instant.
pub fn snapshot_now(config: &SnapshotConfig) -> CalendarSnapshot {
    compute_snapshot(&JstTime::now(), config)
}

/// Parse a timestamp (see [`JstTime`]'s `FromStr`) and compute a snapshot.
pub fn snapshot_at(
    timestamp: &str,
    config: &SnapshotConfig,
) -> Result<CalendarSnapshot, KoyomiError> {
    let time: JstTime = timestamp.parse()?;
    Ok(compute_snapshot(&time, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use koyomi_base::{DayCondition, MoonPhase, Sekki};

    #[test]
    fn default_config() {
        let c = SnapshotConfig::default();
        assert_eq!(c.location, GeoLocation::OKAYAMA);
        assert_eq!(c.kou_scheme, KouScheme::Longitude);
        assert_eq!(c.longitude_model, SolarLongitudeModel::Apparent);
        assert_eq!(c.epoch, LunarEpoch::reference());
    }

    #[test]
    fn at_location_validates() {
        assert!(SnapshotConfig::at_location(35.68, 139.77, 40.0).is_ok());
        assert!(matches!(
            SnapshotConfig::at_location(-95.0, 0.0, 0.0),
            Err(KoyomiError::Base(_))
        ));
    }

    #[test]
    fn snapshot_fields_agree() {
        let s = snapshot_at("2025-12-21T12:00:00+09:00", &SnapshotConfig::default()).unwrap();
        assert_eq!(s.solar_term.sekki, Sekki::Taisetsu);
        assert_eq!(s.lunar_date.phase, MoonPhase::NewMoon);
        assert_eq!(s.rokuyo, s.lunar_date.rokuyo());
        assert_eq!(s.sun_times.condition, DayCondition::Normal);
        assert!((s.julian_day - 2_461_030.625).abs() < 1e-9);
    }

    #[test]
    fn bad_timestamp_is_time_error() {
        let err = snapshot_at("not a date", &SnapshotConfig::default()).unwrap_err();
        assert!(matches!(err, KoyomiError::Time(_)));
    }

    #[test]
    fn geometric_model_differs_slightly() {
        let t: JstTime = "2025-06-01T00:00:00+09:00".parse().unwrap();
        let apparent = compute_snapshot(&t, &SnapshotConfig::default());
        let geometric = compute_snapshot(
            &t,
            &SnapshotConfig {
                longitude_model: SolarLongitudeModel::Geometric,
                ..Default::default()
            },
        );
        let d = geometric.solar_longitude_deg - apparent.solar_longitude_deg;
        assert!(d > 0.0 && d < 0.02, "d = {d}");
    }
}
