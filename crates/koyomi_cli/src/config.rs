//! Optional TOML configuration for the `snapshot` and `sun-times` commands.
//!
//! ```toml
//! kou_scheme = "calendar"
//! geometric = false
//!
//! [location]
//! latitude = 35.68
//! longitude = 139.77
//! altitude = 40.0
//!
//! [epoch]
//! timestamp = "2025-12-10T12:00:00+09:00"
//! year = 2025
//! month = 10
//! day = 21
//! moon_age = 19.8
//! ```

use std::fmt::{Display, Formatter};
use std::path::Path;

use koyomi_rs::{
    GeoLocation, JstTime, KoyomiError, KouScheme, LunarEpoch, SnapshotConfig, SolarLongitudeModel,
};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemeArg {
    Longitude,
    Calendar,
}

impl From<SchemeArg> for KouScheme {
    fn from(s: SchemeArg) -> Self {
        match s {
            SchemeArg::Longitude => KouScheme::Longitude,
            SchemeArg::Calendar => KouScheme::Calendar,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub kou_scheme: Option<SchemeArg>,
    pub geometric: Option<bool>,
    pub location: Option<LocationSection>,
    pub epoch: Option<EpochSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSection {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpochSection {
    pub timestamp: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub moon_age: f64,
}

/// Failure to read or apply a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(KoyomiError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Toml(e) => write!(f, "malformed config: {e}"),
            Self::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<KoyomiError> for ConfigError {
    fn from(e: KoyomiError) -> Self {
        Self::Invalid(e)
    }
}

impl FileConfig {
    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::parse(&text)
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Toml)
    }

    /// Layer the file values over the defaults.
    pub fn to_snapshot_config(&self) -> Result<SnapshotConfig, ConfigError> {
        let mut config = SnapshotConfig::default();
        if let Some(scheme) = self.kou_scheme {
            config.kou_scheme = scheme.into();
        }
        if self.geometric == Some(true) {
            config.longitude_model = SolarLongitudeModel::Geometric;
        }
        if let Some(loc) = &self.location {
            config.location = GeoLocation::try_new(loc.latitude, loc.longitude, loc.altitude)
                .map_err(KoyomiError::from)?;
        }
        if let Some(e) = &self.epoch {
            let instant: JstTime = e.timestamp.parse().map_err(KoyomiError::from)?;
            config.epoch = LunarEpoch::try_new(instant, e.year, e.month, e.day, e.moon_age)
                .map_err(KoyomiError::from)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let cfg = FileConfig::parse("").unwrap().to_snapshot_config().unwrap();
        assert_eq!(cfg, SnapshotConfig::default());
    }

    #[test]
    fn full_file() {
        let text = r#"
kou_scheme = "calendar"
geometric = true

[location]
latitude = 35.68
longitude = 139.77

[epoch]
timestamp = "2026-02-17T12:00:00+09:00"
year = 2026
month = 1
day = 1
moon_age = 0.2
"#;
        let cfg = FileConfig::parse(text).unwrap().to_snapshot_config().unwrap();
        assert_eq!(cfg.kou_scheme, KouScheme::Calendar);
        assert_eq!(cfg.longitude_model, SolarLongitudeModel::Geometric);
        assert_eq!(cfg.location.latitude_deg, 35.68);
        assert_eq!(cfg.location.altitude_m, 0.0);
        assert_eq!((cfg.epoch.year, cfg.epoch.month, cfg.epoch.day), (2026, 1, 1));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(matches!(
            FileConfig::parse("latitude = 35.0"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn out_of_range_location_rejected() {
        let file = FileConfig::parse("[location]\nlatitude = 120.0\nlongitude = 0.0\n").unwrap();
        assert!(matches!(
            file.to_snapshot_config(),
            Err(ConfigError::Invalid(KoyomiError::Base(_)))
        ));
    }

    #[test]
    fn out_of_range_epoch_rejected() {
        for fields in [
            "year = 2025\nmonth = 13\nday = 1\nmoon_age = 0.0\n",
            "year = 2025\nmonth = 10\nday = 45\nmoon_age = 0.0\n",
            "year = 2025\nmonth = 10\nday = 21\nmoon_age = nan\n",
            "year = 2025\nmonth = 10\nday = 21\nmoon_age = 30.0\n",
        ] {
            let text = format!("[epoch]\ntimestamp = \"2025-12-10T12:00:00+09:00\"\n{fields}");
            let file = FileConfig::parse(&text).unwrap();
            assert!(
                matches!(
                    file.to_snapshot_config(),
                    Err(ConfigError::Invalid(KoyomiError::Base(_)))
                ),
                "accepted: {fields}"
            );
        }
    }

    #[test]
    fn bad_epoch_timestamp_rejected() {
        let text = "[epoch]\ntimestamp = \"soon\"\nyear = 1\nmonth = 1\nday = 1\nmoon_age = 0.0\n";
        let file = FileConfig::parse(text).unwrap();
        assert!(matches!(
            file.to_snapshot_config(),
            Err(ConfigError::Invalid(KoyomiError::Time(_)))
        ));
    }
}
