//! Shared angle helpers for the classifiers.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs can round to exactly 360.0 under `rem_euclid`;
/// those are folded back to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

/// Index `i` of the half-open cyclic interval `[anchors[i], anchors[i + 1])`
/// that contains `lon_deg`, with the last interval closing on `anchors[0]`.
///
/// Anchors are in table order and may wrap through 0 deg exactly once; the
/// pair where `anchors[i] > anchors[i + 1]` is treated as
/// `[anchors[i], 360) ∪ [0, anchors[i + 1])`. Returns `None` only if the
/// table does not cover the circle.
pub fn cyclic_interval_index(anchors: &[f64], lon_deg: f64) -> Option<usize> {
    let lon = normalize_360(lon_deg);
    let n = anchors.len();
    (0..n).find(|&i| {
        let start = anchors[i];
        let end = anchors[(i + 1) % n];
        if start < end {
            lon >= start && lon < end
        } else {
            lon >= start || lon < end
        }
    })
}
