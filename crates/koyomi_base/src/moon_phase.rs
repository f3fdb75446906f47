//! Moon phase labels keyed by moon age.
//!
//! Nine labels selected by ascending upper-bound thresholds on the age in
//! days since new moon. The first threshold the age is strictly below
//! wins; anything past the last threshold is 有明月.

/// Discrete moon phase, in order of increasing age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    ApproachingFirstQuarter,
    FirstQuarter,
    ApproachingFull,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    OldMoon,
}

/// All 9 phases in threshold order.
pub const ALL_MOON_PHASES: [MoonPhase; 9] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::ApproachingFirstQuarter,
    MoonPhase::FirstQuarter,
    MoonPhase::ApproachingFull,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::OldMoon,
];

/// Exclusive upper bounds on moon age (days) for all but the last phase.
const PHASE_UPPER_BOUNDS: [f64; 8] = [1.5, 3.7, 7.4, 11.0, 14.8, 16.3, 22.1, 25.9];

impl MoonPhase {
    /// Japanese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "新月",
            Self::WaxingCrescent => "三日月",
            Self::ApproachingFirstQuarter => "上弦に向かう月",
            Self::FirstQuarter => "上弦の月",
            Self::ApproachingFull => "満月に向かう月",
            Self::FullMoon => "満月",
            Self::WaningGibbous => "寝待月",
            Self::LastQuarter => "下弦の月",
            Self::OldMoon => "有明月",
        }
    }

    /// English label.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::ApproachingFirstQuarter => "Approaching First Quarter",
            Self::FirstQuarter => "First Quarter",
            Self::ApproachingFull => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::OldMoon => "Old Moon",
        }
    }

    /// How the moon looks in the evening sky.
    pub const fn appearance(self) -> &'static str {
        match self {
            Self::NewMoon => {
                "月は太陽と同じ方向にあり、夜空に姿は見えません。星がよく見える夜です。"
            }
            Self::WaxingCrescent => "日没後の西の空低く、細い月が弧を描いて輝きます。",
            Self::ApproachingFirstQuarter => {
                "夕方の西から南西の空に、少しずつ太っていく月が見えます。"
            }
            Self::FirstQuarter => "夕暮れの南の空に、右半分が光る半月がかかります。",
            Self::ApproachingFull => "宵の東南の空に、満ちていく丸みを帯びた月が昇ります。",
            Self::FullMoon => "日没とともに東の空から丸い月が昇り、一晩中夜空を照らします。",
            Self::WaningGibbous => "夜が更けてから東の空に、少し欠けはじめた月が昇ってきます。",
            Self::LastQuarter => "真夜中ごろに昇り、明け方の南の空に左半分が光る半月が見えます。",
            Self::OldMoon => "夜明け前の東の空に、細くなった月が静かに残ります。",
        }
    }

    /// Exclusive upper bound on moon age, or `None` for the final phase.
    pub const fn upper_bound_days(self) -> Option<f64> {
        match self {
            Self::OldMoon => None,
            other => Some(PHASE_UPPER_BOUNDS[other as usize]),
        }
    }
}

/// Classify moon age (days since new moon) into a phase.
pub fn classify_moon_phase(moon_age: f64) -> MoonPhase {
    PHASE_UPPER_BOUNDS
        .iter()
        .position(|&bound| moon_age < bound)
        .map_or(MoonPhase::OldMoon, |i| ALL_MOON_PHASES[i])
}
