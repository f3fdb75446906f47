//! Micro-season (七十二候) classification.
//!
//! Each solar term is split into three micro-seasons (初候, 次候, 末候).
//! The canonical scheme anchors them every 5 deg of solar longitude from
//! 315 deg, the same physical quantity as the solar terms. A lower-fidelity
//! calendar scheme keys them off fixed `(month, day)` start dates instead.
//! The two schemes keep separate anchor tables; only the names are shared.

use chrono::{Datelike, NaiveDate};

use crate::kou_data::{KOU_CALENDAR_ANCHORS, KOU_TABLE};
use crate::sekki::{ALL_SEKKI, Sekki};
use crate::util::{cyclic_interval_index, normalize_360};

/// Width of one micro-season in degrees of solar longitude.
pub const KOU_SPAN_DEG: f64 = 5.0;

/// Longitude anchors in table order: 315, 320, ..., 355, 0, ..., 310.
pub const KOU_ANCHORS_DEG: [f64; 72] = kou_anchors();

const fn kou_anchors() -> [f64; 72] {
    let mut anchors = [0.0; 72];
    let mut i = 0;
    while i < 72 {
        let deg = 315.0 + KOU_SPAN_DEG * i as f64;
        anchors[i] = if deg >= 360.0 { deg - 360.0 } else { deg };
        i += 1;
    }
    anchors
}

/// One micro-season record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kou {
    /// Kanji name, e.g. `"乃東生"`.
    pub name: &'static str,
    /// Hiragana reading.
    pub reading: &'static str,
    /// Short gloss of the seasonal sign.
    pub description: &'static str,
}

impl Kou {
    /// Build a table row.
    pub const fn new(name: &'static str, reading: &'static str, description: &'static str) -> Self {
        Self {
            name,
            reading,
            description,
        }
    }
}

/// Position of a micro-season within its solar term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KouPhase {
    /// 初候, the first five days.
    Shoko,
    /// 次候, the middle five days.
    Jiko,
    /// 末候, the last five days.
    Matsuko,
}

impl KouPhase {
    /// Kanji label: 初候, 次候 or 末候.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shoko => "初候",
            Self::Jiko => "次候",
            Self::Matsuko => "末候",
        }
    }

    const fn from_table_index(idx: usize) -> Self {
        match idx % 3 {
            0 => Self::Shoko,
            1 => Self::Jiko,
            _ => Self::Matsuko,
        }
    }
}

/// Micro-season classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KouInfo {
    /// The micro-season record.
    pub kou: Kou,
    /// 0-based table index (0 = 東風解凍 .. 71 = 鶏始乳).
    pub index: u8,
    /// Solar term the micro-season belongs to.
    pub sekki: Sekki,
    /// Position within that solar term.
    pub phase: KouPhase,
}

impl KouInfo {
    fn from_table_index(idx: usize) -> Self {
        Self {
            kou: KOU_TABLE[idx],
            index: idx as u8,
            sekki: ALL_SEKKI[idx / 3],
            phase: KouPhase::from_table_index(idx),
        }
    }
}

/// Which anchor table to classify against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KouScheme {
    /// 5-degree steps of solar longitude (canonical).
    #[default]
    Longitude,
    /// Fixed `(month, day)` start dates.
    Calendar,
}

/// Classify a solar longitude into its micro-season.
///
/// # Panics
/// If the anchor table fails to cover the longitude (corrupted table).
pub fn kou_from_longitude(longitude_deg: f64) -> KouInfo {
    let lon = normalize_360(longitude_deg);
    let Some(idx) = cyclic_interval_index(&KOU_ANCHORS_DEG, lon) else {
        panic!("micro-season table does not cover longitude {lon} deg");
    };
    KouInfo::from_table_index(idx)
}

/// Classify a calendar date by the fixed start-date table.
///
/// Picks the latest anchor on or before `(month, day)`. Dates before the
/// first anchor of the year fall back to the last row (the season that
/// began in late December).
pub fn kou_from_month_day(month: u32, day: u32) -> KouInfo {
    let row = KOU_CALENDAR_ANCHORS
        .iter()
        .rev()
        .find(|&&(m, d, _)| (m, d) <= (month, day))
        .unwrap_or(&KOU_CALENDAR_ANCHORS[KOU_CALENDAR_ANCHORS.len() - 1]);
    KouInfo::from_table_index(row.2 as usize)
}

/// Classify by whichever scheme is selected.
///
/// `longitude_deg` is used by [`KouScheme::Longitude`], `date` by
/// [`KouScheme::Calendar`].
pub fn classify_micro_season(scheme: KouScheme, longitude_deg: f64, date: NaiveDate) -> KouInfo {
    match scheme {
        KouScheme::Longitude => kou_from_longitude(longitude_deg),
        KouScheme::Calendar => kou_from_month_day(date.month(), date.day()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(KOU_TABLE.len(), 72);
        assert_eq!(KOU_CALENDAR_ANCHORS.len(), 72);
    }

    #[test]
    fn anchors_step_five_degrees() {
        assert_eq!(KOU_ANCHORS_DEG[0], 315.0);
        assert_eq!(KOU_ANCHORS_DEG[8], 355.0);
        assert_eq!(KOU_ANCHORS_DEG[9], 0.0);
        assert_eq!(KOU_ANCHORS_DEG[71], 310.0);
    }

    #[test]
    fn kou_anchors_align_with_sekki() {
        for (i, s) in ALL_SEKKI.iter().enumerate() {
            assert_eq!(KOU_ANCHORS_DEG[i * 3], s.anchor_deg());
        }
    }

    #[test]
    fn calendar_table_sorted_and_complete() {
        for w in KOU_CALENDAR_ANCHORS.windows(2) {
            assert!((w[0].0, w[0].1) < (w[1].0, w[1].1), "{w:?}");
        }
        let mut seen = [false; 72];
        for &(_, _, idx) in &KOU_CALENDAR_ANCHORS {
            seen[idx as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn first_micro_season() {
        let info = kou_from_longitude(315.0);
        assert_eq!(info.kou.name, "東風解凍");
        assert_eq!(info.sekki, Sekki::Risshun);
        assert_eq!(info.phase, KouPhase::Shoko);
    }

    #[test]
    fn solstice_boundary() {
        let before = kou_from_longitude(269.99);
        assert_eq!(before.kou.name, "鱖魚群");
        assert_eq!(before.phase, KouPhase::Matsuko);
        let at = kou_from_longitude(270.0);
        assert_eq!(at.kou.name, "乃東生");
        assert_eq!(at.sekki, Sekki::Touji);
        assert_eq!(at.index, 63);
    }

    #[test]
    fn zero_degrees_is_shunbun_shoko() {
        let info = kou_from_longitude(0.0);
        assert_eq!(info.kou.name, "雀始巣");
        assert_eq!(info.sekki, Sekki::Shunbun);
    }

    #[test]
    fn calendar_before_first_anchor_falls_back() {
        let info = kou_from_month_day(1, 1);
        assert_eq!(info.kou.name, "雪下出麦");
        assert_eq!(info.sekki, Sekki::Touji);
    }

    #[test]
    fn calendar_exact_anchor_and_between() {
        assert_eq!(kou_from_month_day(1, 5).kou.name, "芹乃栄");
        assert_eq!(kou_from_month_day(2, 3).kou.name, "鶏始乳");
        assert_eq!(kou_from_month_day(2, 4).kou.name, "東風解凍");
        assert_eq!(kou_from_month_day(6, 30).kou.name, "菖蒲華");
        assert_eq!(kou_from_month_day(12, 31).kou.name, "雪下出麦");
    }

    #[test]
    fn scheme_dispatch() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let by_lon = classify_micro_season(KouScheme::Longitude, 315.0, date);
        let by_cal = classify_micro_season(KouScheme::Calendar, 315.0, date);
        assert_eq!(by_lon.kou.name, "東風解凍");
        assert_eq!(by_cal.kou.name, "雪下出麦");
    }

    #[test]
    fn default_scheme_is_longitude() {
        assert_eq!(KouScheme::default(), KouScheme::Longitude);
    }
}
