//! 六曜 (rokuyō), the six-day fortune cycle keyed to the lunar date.
//!
//! `(lunar_month + lunar_day) mod 6` picks the label, so the first day of
//! the first lunar month is always 先勝.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rokuyo {
    Taian,
    Shakkou,
    Senshou,
    Tomobiki,
    Senbu,
    Butsumetsu,
}

/// Indexed by `(month + day) % 6`.
pub const ALL_ROKUYO: [Rokuyo; 6] = [
    Rokuyo::Taian,
    Rokuyo::Shakkou,
    Rokuyo::Senshou,
    Rokuyo::Tomobiki,
    Rokuyo::Senbu,
    Rokuyo::Butsumetsu,
];

impl Rokuyo {
    /// Kanji label, e.g. `"大安"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Taian => "大安",
            Self::Shakkou => "赤口",
            Self::Senshou => "先勝",
            Self::Tomobiki => "友引",
            Self::Senbu => "先負",
            Self::Butsumetsu => "仏滅",
        }
    }

    /// Hiragana reading.
    pub const fn reading(self) -> &'static str {
        match self {
            Self::Taian => "たいあん",
            Self::Shakkou => "しゃっこう",
            Self::Senshou => "せんしょう",
            Self::Tomobiki => "ともびき",
            Self::Senbu => "せんぶ",
            Self::Butsumetsu => "ぶつめつ",
        }
    }
}

/// 六曜 for a lunar month (1-12) and day (1-30).
pub fn rokuyo_for(lunar_month: u32, lunar_day: u32) -> Rokuyo {
    ALL_ROKUYO[((lunar_month + lunar_day) % 6) as usize]
}
