//! Calendar snapshots for the koyomi engine.
//!
//! Combines the solar, lunar and sun-time calculators from `koyomi_base`
//! into one [`CalendarSnapshot`] per instant, the single value handed to
//! downstream text generation and publishing.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use koyomi_rs::*;
//!
//! let snap = snapshot_at("2025-12-22T12:00:00+09:00", &SnapshotConfig::default())?;
//! println!("{} {}", snap.solar_term.sekki.name(), snap.sun_times.sunrise);
//! ```

pub mod collab;
pub mod error;
pub mod record;
pub mod snapshot;

pub use collab::{ProseGenerator, Publisher, snapshot_labels, snapshot_title};
pub use error::KoyomiError;
pub use record::{LunarRecord, MicroSeasonRecord, SnapshotRecord, SolarTermRecord, SunRecord};
pub use snapshot::{CalendarSnapshot, SnapshotConfig, compute_snapshot, snapshot_at, snapshot_now};

// Re-export the types callers need to build a config or read a snapshot.
pub use koyomi_base::{
    ClockTime, DayCondition, GeoLocation, Kou, KouInfo, KouPhase, KouScheme, LunarDate,
    LunarEpoch, MoonPhase, RiseSetConfig, Rokuyo, Sekki, SekkiInfo, SolarLongitudeModel, SunTimes,
};
pub use koyomi_time::{JstTime, TimeError};
