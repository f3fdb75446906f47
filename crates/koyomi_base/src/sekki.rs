//! The 24 solar terms (二十四節気).
//!
//! Each term begins when the Sun's apparent ecliptic longitude reaches a
//! fixed anchor; anchors are 15 deg apart starting from 立春 at 315 deg.
//! Table order starts at 立春 and wraps through 春分 at 0 deg.

use crate::solar_longitude::MEAN_SOLAR_MOTION_DEG_PER_DAY;
use crate::util::{cyclic_interval_index, normalize_360};

/// Width of one solar term in degrees.
pub const SEKKI_SPAN_DEG: f64 = 15.0;

/// The 24 solar terms in table order, from 立春 (Risshun).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sekki {
    Risshun,
    Usui,
    Keichitsu,
    Shunbun,
    Seimei,
    Kokuu,
    Rikka,
    Shouman,
    Boushu,
    Geshi,
    Shousho,
    Taisho,
    Risshuu,
    Shosho,
    Hakuro,
    Shuubun,
    Kanro,
    Soukou,
    Rittou,
    Shousetsu,
    Taisetsu,
    Touji,
    Shoukan,
    Daikan,
}

/// All 24 solar terms in table order (0 = 立春, 23 = 大寒).
pub const ALL_SEKKI: [Sekki; 24] = [
    Sekki::Risshun,
    Sekki::Usui,
    Sekki::Keichitsu,
    Sekki::Shunbun,
    Sekki::Seimei,
    Sekki::Kokuu,
    Sekki::Rikka,
    Sekki::Shouman,
    Sekki::Boushu,
    Sekki::Geshi,
    Sekki::Shousho,
    Sekki::Taisho,
    Sekki::Risshuu,
    Sekki::Shosho,
    Sekki::Hakuro,
    Sekki::Shuubun,
    Sekki::Kanro,
    Sekki::Soukou,
    Sekki::Rittou,
    Sekki::Shousetsu,
    Sekki::Taisetsu,
    Sekki::Touji,
    Sekki::Shoukan,
    Sekki::Daikan,
];

/// Anchor longitudes in table order.
pub const SEKKI_ANCHORS_DEG: [f64; 24] = [
    315.0, 330.0, 345.0, 0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0, 105.0, 120.0, 135.0, 150.0,
    165.0, 180.0, 195.0, 210.0, 225.0, 240.0, 255.0, 270.0, 285.0, 300.0,
];

/// (name, reading, description) in table order.
const SEKKI_TEXT: [(&str, &str, &str); 24] = [
    (
        "立春",
        "りっしゅん",
        "暦の上で春が始まる日。寒さの底を越え、日差しに春の気配が混じりはじめる。",
    ),
    ("雨水", "うすい", "降る雪が雨に変わり、積もった雪や氷が解けて水になるころ。"),
    ("啓蟄", "けいちつ", "土の中で冬ごもりしていた虫たちが、戸を開いて這い出してくるころ。"),
    ("春分", "しゅんぶん", "太陽が真東から昇り真西に沈み、昼と夜の長さがほぼ等しくなる日。"),
    ("清明", "せいめい", "万物が清らかで生き生きとし、花が咲き鳥が歌う明るい季節。"),
    ("穀雨", "こくう", "田畑を潤す春の雨が降り、穀物の芽が育つころ。"),
    ("立夏", "りっか", "暦の上で夏が始まる日。新緑がまぶしく、風に夏の匂いが混じる。"),
    ("小満", "しょうまん", "草木が育ち、天地に生命が満ちはじめるころ。"),
    ("芒種", "ぼうしゅ", "稲や麦など芒のある穀物の種をまく、田植えの季節。"),
    ("夏至", "げし", "一年で最も昼が長く、夜が短い日。"),
    ("小暑", "しょうしょ", "梅雨明けが近づき、本格的な暑さが始まるころ。"),
    ("大暑", "たいしょ", "一年で最も暑さが厳しいころ。"),
    ("立秋", "りっしゅう", "暦の上で秋が始まる日。暑さの中にも秋の気配が漂いはじめる。"),
    ("処暑", "しょしょ", "暑さが峠を越え、朝夕に涼しさを感じはじめるころ。"),
    ("白露", "はくろ", "草花に朝露が白く光り、秋らしさが深まるころ。"),
    ("秋分", "しゅうぶん", "昼と夜の長さがほぼ等しくなり、これから夜が長くなっていく日。"),
    ("寒露", "かんろ", "草木に降りる露が冷たく感じられ、秋が深まるころ。"),
    ("霜降", "そうこう", "朝晩の冷え込みが増し、霜が降りはじめるころ。"),
    ("立冬", "りっとう", "暦の上で冬が始まる日。木枯らしが吹き、冬の訪れを感じる。"),
    ("小雪", "しょうせつ", "寒さが進み、山々に初雪が舞いはじめるころ。"),
    ("大雪", "たいせつ", "山は雪に覆われ、平地にも雪が降りはじめるころ。"),
    ("冬至", "とうじ", "一年で最も昼が短く、夜が長い日。ここから日が延びていく。"),
    ("小寒", "しょうかん", "寒の入り。寒さがいっそう厳しくなりはじめるころ。"),
    ("大寒", "だいかん", "一年で最も寒さが厳しいころ。春はもうすぐそこ。"),
];

/// English names in table order.
const SEKKI_ENGLISH: [&str; 24] = [
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Vernal Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumnal Equinox",
    "Cold Dew",
    "Frost Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
    "Minor Cold",
    "Major Cold",
];

impl Sekki {
    /// 0-based table index (立春 = 0 .. 大寒 = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Kanji name, e.g. `"冬至"`.
    pub const fn name(self) -> &'static str {
        SEKKI_TEXT[self as usize].0
    }

    /// Hiragana reading, e.g. `"とうじ"`.
    pub const fn reading(self) -> &'static str {
        SEKKI_TEXT[self as usize].1
    }

    /// One-sentence description of the season.
    pub const fn description(self) -> &'static str {
        SEKKI_TEXT[self as usize].2
    }

    /// English name, e.g. `"Winter Solstice"`.
    pub const fn english_name(self) -> &'static str {
        SEKKI_ENGLISH[self as usize]
    }

    /// Solar longitude at which this term begins.
    pub const fn anchor_deg(self) -> f64 {
        SEKKI_ANCHORS_DEG[self as usize]
    }

    /// The term that follows this one.
    pub const fn next(self) -> Sekki {
        ALL_SEKKI[(self as usize + 1) % 24]
    }

    /// All 24 terms in table order.
    pub const fn all() -> &'static [Sekki; 24] {
        &ALL_SEKKI
    }
}

/// Solar term classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SekkiInfo {
    /// The active solar term.
    pub sekki: Sekki,
    /// 0-based table index.
    pub index: u8,
    /// Degrees travelled since the term's anchor, [0, 15).
    pub degrees_into: f64,
    /// Degrees remaining until the next term's anchor, (0, 15].
    pub degrees_to_next: f64,
}

impl SekkiInfo {
    /// Rough days until the next term, at the Sun's mean motion.
    pub fn approx_days_until_next(&self) -> f64 {
        self.degrees_to_next / MEAN_SOLAR_MOTION_DEG_PER_DAY
    }
}

/// Classify a solar longitude into its solar term.
///
/// # Panics
/// If the anchor table fails to cover the longitude. The table is a
/// constant partition of the circle, so this indicates corrupted data.
pub fn classify_solar_term(longitude_deg: f64) -> SekkiInfo {
    let lon = normalize_360(longitude_deg);
    let Some(idx) = cyclic_interval_index(&SEKKI_ANCHORS_DEG, lon) else {
        panic!("solar term table does not cover longitude {lon} deg");
    };
    let sekki = ALL_SEKKI[idx];
    let degrees_into = normalize_360(lon - sekki.anchor_deg());
    SekkiInfo {
        sekki,
        index: idx as u8,
        degrees_into,
        degrees_to_next: SEKKI_SPAN_DEG - degrees_into,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SEKKI.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn anchors_are_fifteen_apart() {
        for s in ALL_SEKKI {
            let gap = normalize_360(s.next().anchor_deg() - s.anchor_deg());
            assert!((gap - SEKKI_SPAN_DEG).abs() < 1e-12, "{}", s.name());
        }
    }

    #[test]
    fn text_nonempty() {
        for s in ALL_SEKKI {
            assert!(!s.name().is_empty());
            assert!(!s.reading().is_empty());
            assert!(!s.description().is_empty());
            assert!(!s.english_name().is_empty());
        }
    }

    #[test]
    fn vernal_equinox_at_zero() {
        let info = classify_solar_term(0.0);
        assert_eq!(info.sekki, Sekki::Shunbun);
        assert_eq!(info.sekki.name(), "春分");
        assert_eq!(info.degrees_into, 0.0);
    }

    #[test]
    fn wrap_interval_before_zero() {
        assert_eq!(classify_solar_term(359.99).sekki, Sekki::Keichitsu);
        assert_eq!(classify_solar_term(345.0).sekki, Sekki::Keichitsu);
    }

    #[test]
    fn winter_solstice_boundary() {
        assert_eq!(classify_solar_term(269.999).sekki, Sekki::Taisetsu);
        assert_eq!(classify_solar_term(270.0).sekki, Sekki::Touji);
        assert_eq!(Sekki::Touji.name(), "冬至");
    }

    #[test]
    fn table_start_at_315() {
        let info = classify_solar_term(315.0);
        assert_eq!(info.sekki, Sekki::Risshun);
        assert_eq!(info.index, 0);
    }

    #[test]
    fn negative_and_large_inputs_wrap() {
        assert_eq!(classify_solar_term(-45.0).sekki, Sekki::Risshun);
        assert_eq!(classify_solar_term(360.0 + 91.0).sekki, Sekki::Geshi);
    }

    #[test]
    fn degrees_to_next_and_days() {
        let info = classify_solar_term(275.0);
        assert_eq!(info.sekki, Sekki::Touji);
        assert!((info.degrees_into - 5.0).abs() < 1e-9);
        assert!((info.degrees_to_next - 10.0).abs() < 1e-9);
        let days = info.approx_days_until_next();
        assert!((days - 10.146).abs() < 0.01, "days = {days}");
    }

    #[test]
    fn next_wraps_to_risshun() {
        assert_eq!(Sekki::Daikan.next(), Sekki::Risshun);
    }
}
