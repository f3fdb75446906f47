//! Traditional Japanese calendar calculations on a low-order solar series.
//!
//! This crate provides:
//! - Apparent solar longitude (Meeus ch. 25)
//! - 二十四節気 (24 solar terms) and 七十二候 (72 micro-seasons)
//! - Lunar date, moon age and 六曜 from a fixed reference epoch
//! - Moon phase labels and illuminated fraction
//! - Sunrise/sunset with equation of time and polar-day handling
//!
//! Everything here is pure arithmetic on `f64`; no ephemeris files or
//! network access are needed.

pub mod error;
pub mod kou;
mod kou_data;
pub mod lunar;
pub mod moon_phase;
pub mod riseset;
pub mod riseset_types;
pub mod rokuyo;
pub mod sekki;
pub mod solar_longitude;
pub mod util;

pub use error::BaseError;
pub use kou::{
    KOU_SPAN_DEG, Kou, KouInfo, KouPhase, KouScheme, classify_micro_season, kou_from_longitude,
    kou_from_month_day,
};
pub use lunar::{
    LunarDate, LunarEpoch, SYNODIC_MONTH_DAYS, compute_lunar_date, compute_lunar_date_with_epoch,
    lunar_month_name, moon_illumination, normalize_day, shift_month,
};
pub use moon_phase::{ALL_MOON_PHASES, MoonPhase, classify_moon_phase};
pub use riseset::{
    compute_sunrise_sunset, equation_of_time_min, hour_angle_deg, solar_declination_deg,
    sun_equatorial,
};
pub use riseset_types::{ClockTime, DayCondition, GeoLocation, RiseSetConfig, SunTimes};
pub use rokuyo::{ALL_ROKUYO, Rokuyo, rokuyo_for};
pub use sekki::{ALL_SEKKI, SEKKI_SPAN_DEG, Sekki, SekkiInfo, classify_solar_term};
pub use solar_longitude::{
    MEAN_SOLAR_MOTION_DEG_PER_DAY, SolarLongitudeModel, SolarPosition, compute_solar_longitude,
    solar_longitude_deg, solar_position,
};
pub use util::{normalize_360, normalize_pm180};
