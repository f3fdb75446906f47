//! Property tests tying `JstTime` arithmetic to the Julian Date scale.

use koyomi_time::{JstTime, jd_to_calendar};
use proptest::prelude::*;

// 1900-01-01 .. 2100-01-01 in Unix seconds
const MIN_UNIX: i64 = -2_208_988_800;
const MAX_UNIX: i64 = 4_102_444_800;

proptest! {
    #[test]
    fn jd_difference_matches_days_since(a in MIN_UNIX..MAX_UNIX, b in MIN_UNIX..MAX_UNIX) {
        let ta = JstTime::from_unix_seconds(a);
        let tb = JstTime::from_unix_seconds(b);
        let by_jd = tb.to_jd_utc() - ta.to_jd_utc();
        prop_assert!((by_jd - tb.days_since(&ta)).abs() < 1e-6);
    }

    #[test]
    fn jd_maps_back_to_utc_date(secs in MIN_UNIX..MAX_UNIX) {
        let t = JstTime::from_unix_seconds(secs);
        let utc = t.to_utc();
        let (y, m, d) = jd_to_calendar(t.to_jd_utc());
        let expected = chrono::Datelike::day(&utc) as f64
            + chrono::Timelike::num_seconds_from_midnight(&utc) as f64 / 86_400.0;
        prop_assert_eq!(y, chrono::Datelike::year(&utc));
        prop_assert_eq!(m, chrono::Datelike::month(&utc));
        prop_assert!((d - expected).abs() < 1e-6);
    }
}

#[test]
fn reference_lunar_epoch_instant() {
    let t = JstTime::from_unix_seconds(1_765_335_600);
    assert_eq!(t.to_string(), "2025-12-10T12:00:00+09:00");
}
