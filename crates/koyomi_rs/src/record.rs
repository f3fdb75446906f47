//! Flat, serializable view of a [`CalendarSnapshot`].
//!
//! Enums are rendered as their Japanese labels so the record can be handed
//! to text generators and templates without further lookups.

use koyomi_base::DayCondition;
use serde::Serialize;

use crate::snapshot::CalendarSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarTermRecord {
    pub name: &'static str,
    pub reading: &'static str,
    pub english: &'static str,
    pub description: &'static str,
    pub index: u8,
    pub degrees_into: f64,
    pub days_until_next: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicroSeasonRecord {
    pub name: &'static str,
    pub reading: &'static str,
    pub description: &'static str,
    /// 初候, 次候 or 末候.
    pub phase: &'static str,
    pub index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub month_name: &'static str,
    pub moon_age: f64,
    pub phase: &'static str,
    pub appearance: &'static str,
    pub rokuyo: &'static str,
    pub illumination: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunRecord {
    /// `HH:MM`
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub day_length_hours: f64,
    pub equation_of_time_min: f64,
    /// `normal`, `polar_day` or `polar_night`.
    pub condition: &'static str,
}

/// Serializable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRecord {
    /// RFC 3339 with `+09:00`.
    pub timestamp: String,
    pub julian_day: f64,
    pub solar_longitude_deg: f64,
    pub solar_term: SolarTermRecord,
    pub micro_season: MicroSeasonRecord,
    pub lunar: LunarRecord,
    pub sun: SunRecord,
}

fn condition_label(c: DayCondition) -> &'static str {
    match c {
        DayCondition::Normal => "normal",
        DayCondition::PolarDay => "polar_day",
        DayCondition::PolarNight => "polar_night",
    }
}

impl From<&CalendarSnapshot> for SnapshotRecord {
    fn from(s: &CalendarSnapshot) -> Self {
        let term = &s.solar_term;
        let kou = &s.micro_season;
        let lunar = &s.lunar_date;
        let sun = &s.sun_times;
        Self {
            timestamp: s.timestamp.to_string(),
            julian_day: s.julian_day,
            solar_longitude_deg: s.solar_longitude_deg,
            solar_term: SolarTermRecord {
                name: term.sekki.name(),
                reading: term.sekki.reading(),
                english: term.sekki.english_name(),
                description: term.sekki.description(),
                index: term.index,
                degrees_into: term.degrees_into,
                days_until_next: term.approx_days_until_next(),
            },
            micro_season: MicroSeasonRecord {
                name: kou.kou.name,
                reading: kou.kou.reading,
                description: kou.kou.description,
                phase: kou.phase.name(),
                index: kou.index,
            },
            lunar: LunarRecord {
                year: lunar.year,
                month: lunar.month,
                day: lunar.day,
                month_name: lunar.month_name,
                moon_age: lunar.moon_age,
                phase: lunar.phase.name(),
                appearance: lunar.phase.appearance(),
                rokuyo: s.rokuyo.name(),
                illumination: s.moon_illumination,
            },
            sun: SunRecord {
                sunrise: sun.sunrise.to_string(),
                sunset: sun.sunset.to_string(),
                solar_noon: sun.solar_noon.to_string(),
                day_length_hours: sun.day_length_hours,
                equation_of_time_min: sun.equation_of_time_min,
                condition: condition_label(sun.condition),
            },
        }
    }
}

impl CalendarSnapshot {
    /// Flatten into a [`SnapshotRecord`].
    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord::from(self)
    }
}
