//! Solar position from the low-order theory of Meeus chapter 25.
//!
//! Both tiers share the geometric model (mean anomaly, equation of center,
//! Kepler radius). The high tier corrects for nutation and aberration
//! explicitly and converts through the true obliquity; the low tier uses the
//! node-driven shortcut for both.

use crate::earth::{mean_obliquity, observer_sidereal_time, orbit_eccentricity, true_obliquity_with};
use crate::nutation::nutation;
use firmament_core::angle::{cos_deg, revd, sin_deg};
use firmament_core::constants::{AU_KM, SUN_ABERRATION_ARCSEC, SUN_MEAN_RADIUS_KM};
use firmament_core::math::polynomial;
use firmament_core::{ObserverLocation, Precision, Vector3};
use firmament_coords::{EclipticCoords, EquatorialCoords, HorizontalCoords};
use firmament_time::{CalendarTime, JulianDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sun {
    precision: Precision,
}

impl Sun {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Geometric mean longitude L₀ in degrees, [0°, 360°).
    pub fn mean_longitude(&self, jd: JulianDay) -> f64 {
        let t = jd.centuries_since_j2000();
        revd(polynomial(&[280.46646, 36000.76983, 0.0003032], t))
    }

    /// Mean anomaly M in degrees, [0°, 360°).
    pub fn mean_anomaly(&self, jd: JulianDay) -> f64 {
        let t = jd.centuries_since_j2000();
        revd(polynomial(&[357.52911, 35999.05029, -0.0001537], t))
    }

    /// Equation of center C in degrees.
    pub fn equation_of_center(&self, jd: JulianDay) -> f64 {
        let t = jd.centuries_since_j2000();
        let m = self.mean_anomaly(jd);
        polynomial(&[1.914602, -0.004817, -0.000014], t) * sin_deg(m)
            + (0.019993 - 0.000101 * t) * sin_deg(2.0 * m)
            + 0.000289 * sin_deg(3.0 * m)
    }

    /// True geometric longitude ☉ = L₀ + C, degrees.
    pub fn true_longitude(&self, jd: JulianDay) -> f64 {
        revd(self.mean_longitude(jd) + self.equation_of_center(jd))
    }

    /// True anomaly ν = M + C, degrees.
    pub fn true_anomaly(&self, jd: JulianDay) -> f64 {
        revd(self.mean_anomaly(jd) + self.equation_of_center(jd))
    }

    /// Earth-sun distance in astronomical units (Meeus 25.5).
    pub fn distance_au(&self, jd: JulianDay) -> f64 {
        let e = orbit_eccentricity(jd);
        1.000001018 * (1.0 - e * e) / (1.0 + e * cos_deg(self.true_anomaly(jd)))
    }

    /// Earth-sun distance in km.
    pub fn distance(&self, jd: JulianDay) -> f64 {
        self.distance_au(jd) * AU_KM
    }

    /// Apparent longitude λ in degrees.
    pub fn apparent_longitude(&self, jd: JulianDay) -> f64 {
        let true_longitude = self.true_longitude(jd);
        match self.precision {
            Precision::High => {
                let dpsi = nutation(jd, self.precision).longitude;
                let aberration = SUN_ABERRATION_ARCSEC / 3600.0 / self.distance_au(jd);
                revd(true_longitude + dpsi - aberration)
            }
            Precision::Low => {
                revd(true_longitude - 0.00569 - 0.00478 * sin_deg(node_longitude(jd)))
            }
        }
    }

    /// Obliquity used to rotate the apparent longitude into the equator, degrees.
    pub fn apparent_obliquity(&self, jd: JulianDay) -> f64 {
        match self.precision {
            Precision::High => true_obliquity_with(jd, &nutation(jd, self.precision)),
            Precision::Low => mean_obliquity(jd) + 0.00256 * cos_deg(node_longitude(jd)),
        }
    }

    /// Apparent ecliptic position; the latitude is taken as zero, radius in km.
    pub fn apparent_ecliptic(&self, jd: JulianDay) -> EclipticCoords {
        EclipticCoords::with_radius(self.apparent_longitude(jd), 0.0, self.distance(jd))
    }

    /// Apparent right ascension and declination, radius in km.
    pub fn apparent_position(&self, jd: JulianDay) -> EquatorialCoords {
        self.apparent_ecliptic(jd)
            .to_equatorial(self.apparent_obliquity(jd))
    }

    pub fn horizontal_position(
        &self,
        time: &CalendarTime,
        location: &ObserverLocation,
    ) -> HorizontalCoords {
        let jd = time.to_julian_day_utc();
        let lst = observer_sidereal_time(time, location.longitude(), self.precision);
        self.apparent_position(jd)
            .to_horizontal(lst, location.latitude())
    }

    /// Unit vector toward the sun in the local frame (x east, y north, z zenith).
    pub fn direction(&self, time: &CalendarTime, location: &ObserverLocation) -> Vector3 {
        self.horizontal_position(time, location).to_unit_vector()
    }

    /// Apparent angular radius in radians.
    pub fn angular_radius(&self, jd: JulianDay) -> f64 {
        libm::atan(SUN_MEAN_RADIUS_KM / self.distance(jd))
    }
}

/// Longitude of the moon's ascending node as used by the solar shortcuts, degrees.
fn node_longitude(jd: JulianDay) -> f64 {
    125.04 - 1934.136 * jd.centuries_since_j2000()
}
