//! Apparent ecliptic longitude of the Sun from a low-order series.
//!
//! Mean longitude, mean anomaly and a three-term equation of center as in
//! Meeus, *Astronomical Algorithms*, ch. 25 (accuracy ~0.01 deg). The
//! apparent model adds the combined nutation/aberration term
//! `-0.00569 - 0.00478 sin(Ω)`. Time argument is UT; ΔT is ignored.

use koyomi_time::{JstTime, jd_to_centuries};

use crate::util::normalize_360;

/// Mean daily motion of the Sun in ecliptic longitude (deg/day).
pub const MEAN_SOLAR_MOTION_DEG_PER_DAY: f64 = 0.985_647_36;

/// Which longitude the series should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolarLongitudeModel {
    /// True geometric longitude `L0 + C`.
    Geometric,
    /// Geometric longitude corrected for nutation and aberration.
    #[default]
    Apparent,
}

/// Intermediate terms of the solar series at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Julian centuries since J2000.0.
    pub t_centuries: f64,
    /// Geometric mean longitude `L0`, degrees in [0, 360).
    pub mean_longitude_deg: f64,
    /// Mean anomaly `M`, degrees in [0, 360).
    pub mean_anomaly_deg: f64,
    /// Equation of center `C`, degrees.
    pub equation_of_center_deg: f64,
    /// Longitude of the Moon's ascending node `Ω`, degrees.
    pub omega_deg: f64,
}

impl SolarPosition {
    /// True geometric longitude in [0, 360).
    pub fn true_longitude_deg(&self) -> f64 {
        normalize_360(self.mean_longitude_deg + self.equation_of_center_deg)
    }

    /// Apparent longitude in [0, 360).
    pub fn apparent_longitude_deg(&self) -> f64 {
        normalize_360(
            self.mean_longitude_deg + self.equation_of_center_deg
                - 0.00569
                - 0.00478 * self.omega_deg.to_radians().sin(),
        )
    }

    /// Longitude under the requested model.
    pub fn longitude_deg(&self, model: SolarLongitudeModel) -> f64 {
        match model {
            SolarLongitudeModel::Geometric => self.true_longitude_deg(),
            SolarLongitudeModel::Apparent => self.apparent_longitude_deg(),
        }
    }
}

/// Evaluate the solar series at `t` Julian centuries from J2000.0.
pub fn solar_position(t: f64) -> SolarPosition {
    let l0 = 280.46646 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.52911 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();
    let omega = 125.04 - 1934.136 * t;

    SolarPosition {
        t_centuries: t,
        mean_longitude_deg: normalize_360(l0),
        mean_anomaly_deg: normalize_360(m),
        equation_of_center_deg: c,
        omega_deg: omega,
    }
}

/// Solar ecliptic longitude in [0, 360) at a Julian Date.
pub fn solar_longitude_deg(jd: f64, model: SolarLongitudeModel) -> f64 {
    solar_position(jd_to_centuries(jd)).longitude_deg(model)
}

/// Apparent solar longitude in [0, 360) at a timestamp.
pub fn compute_solar_longitude(time: &JstTime) -> f64 {
    solar_longitude_deg(time.to_jd_utc(), SolarLongitudeModel::Apparent)
}
