//! Nutation in longitude and obliquity.
//!
//! The high tier evaluates the 77 lunisolar terms of IAU 2000B with fixed
//! planetary bias corrections (-0.135 mas in Δψ, +0.388 mas in Δε). The low
//! tier is the four-term series of Meeus chapter 22, good to about 0.5″.

use crate::nutation_terms::NUTATION_TERMS;
use firmament_core::angle::{cos_deg, sin_deg};
use firmament_core::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, TWOPI};
use firmament_core::math::fmod;
use firmament_core::Precision;
use firmament_time::JulianDay;

const PLANETARY_BIAS_LONGITUDE_ARCSEC: f64 = -0.000_135;
const PLANETARY_BIAS_OBLIQUITY_ARCSEC: f64 = 0.000_388;

/// Term amplitudes are stored in 0.1 µas.
const TERM_UNIT_ARCSEC: f64 = 1e-7;

/// Nutation angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude: f64,
    /// Δε, nutation in obliquity.
    pub obliquity: f64,
}

impl Nutation {
    pub fn longitude_arcsec(&self) -> f64 {
        self.longitude * 3600.0
    }

    pub fn obliquity_arcsec(&self) -> f64 {
        self.obliquity * 3600.0
    }
}

/// Nutation for a (dynamical) Julian Day at the requested precision.
pub fn nutation(jd: JulianDay, precision: Precision) -> Nutation {
    let t = jd.centuries_since_j2000();
    let (dpsi, deps) = match precision {
        Precision::High => lunisolar_series(t),
        Precision::Low => short_series(t),
    };
    Nutation {
        longitude: dpsi / 3600.0,
        obliquity: deps / 3600.0,
    }
}

/// IAU 2000B lunisolar series, arcseconds.
fn lunisolar_series(t: f64) -> (f64, f64) {
    // Delaunay arguments
    let el = fmod(485868.249036 + 1717915923.2178 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let elp = fmod(1287104.79305 + 129596581.0481 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let f = fmod(335779.526232 + 1739527262.8478 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let d = fmod(1072260.70369 + 1602961601.2090 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let om = fmod(450160.398036 - 6962890.5431 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;

    let mut dpsi = 0.0;
    let mut deps = 0.0;

    // Smallest terms first
    for row in NUTATION_TERMS.iter().rev() {
        let arg = fmod(
            row[0] as f64 * el
                + row[1] as f64 * elp
                + row[2] as f64 * f
                + row[3] as f64 * d
                + row[4] as f64 * om,
            TWOPI,
        );
        let (sarg, carg) = libm::sincos(arg);

        dpsi += (row[5] as f64 + row[6] as f64 * t) * sarg;
        deps += (row[7] as f64 + row[8] as f64 * t) * carg;
    }

    (
        dpsi * TERM_UNIT_ARCSEC + PLANETARY_BIAS_LONGITUDE_ARCSEC,
        deps * TERM_UNIT_ARCSEC + PLANETARY_BIAS_OBLIQUITY_ARCSEC,
    )
}

/// Four-term series driven by Ω and the mean longitudes of the sun (L) and moon (L′), arcseconds.
fn short_series(t: f64) -> (f64, f64) {
    let sun_longitude = 280.4665 + 36000.7698 * t;
    let moon_longitude = 218.3165 + 481267.8813 * t;
    let node = 125.04452 - 1934.136261 * t;

    let dpsi = -17.20 * sin_deg(node) - 1.32 * sin_deg(2.0 * sun_longitude)
        - 0.23 * sin_deg(2.0 * moon_longitude)
        + 0.21 * sin_deg(2.0 * node);
    let deps = 9.20 * cos_deg(node) + 0.57 * cos_deg(2.0 * sun_longitude)
        + 0.10 * cos_deg(2.0 * moon_longitude)
        - 0.09 * cos_deg(2.0 * node);

    (dpsi, deps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Meeus example 22.a: 1987-04-10 0h TD, Δψ = -3.788″, Δε = +9.443″
    const MEEUS_22A: f64 = 2446895.5;

    #[test]
    fn test_high_tier_matches_meeus_22a() {
        let n = nutation(JulianDay::new(MEEUS_22A), Precision::High);
        assert_abs_diff_eq!(n.longitude_arcsec(), -3.788, epsilon = 0.01);
        assert_abs_diff_eq!(n.obliquity_arcsec(), 9.443, epsilon = 0.01);
    }

    #[test]
    fn test_low_tier_matches_meeus_22a() {
        let n = nutation(JulianDay::new(MEEUS_22A), Precision::Low);
        assert_abs_diff_eq!(n.longitude_arcsec(), -3.788, epsilon = 0.2);
        assert_abs_diff_eq!(n.obliquity_arcsec(), 9.443, epsilon = 0.2);
    }

    #[test]
    fn test_tiers_agree_at_j2000() {
        let high = nutation(JulianDay::J2000, Precision::High);
        let low = nutation(JulianDay::J2000, Precision::Low);
        assert_abs_diff_eq!(high.longitude_arcsec(), -13.932, epsilon = 0.01);
        assert_abs_diff_eq!(high.longitude_arcsec(), low.longitude_arcsec(), epsilon = 0.5);
        assert_abs_diff_eq!(high.obliquity_arcsec(), low.obliquity_arcsec(), epsilon = 0.5);
    }

    #[test]
    fn test_amplitude_bounds() {
        for years in [-50.0, -10.0, 0.0, 7.3, 24.0, 80.0] {
            let jd = JulianDay::J2000.add_days(years * 365.25);
            let n = nutation(jd, Precision::High);
            assert!(n.longitude_arcsec().abs() < 20.0);
            assert!(n.obliquity_arcsec().abs() < 11.0);
        }
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(NUTATION_TERMS.len(), 77);
        // Leading 18.6-year term in Ω
        assert_eq!(NUTATION_TERMS[0][..5], [0, 0, 0, 0, 1]);
        assert_eq!(NUTATION_TERMS[0][5], -172064161);
    }
}
