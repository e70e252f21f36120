//! Equatorial coordinates: right ascension and declination.

use crate::ecliptic::EclipticCoords;
use crate::horizontal::HorizontalCoords;
use firmament_core::angle::{asin_deg, atan2_deg, cos_deg, revd, revd_pm, sin_deg};
use firmament_core::constants::DEG_TO_RAD;
use firmament_core::math::vincenty_angular_separation;
use firmament_core::Vector3;

/// A position on the celestial sphere referred to the Earth's equator.
///
/// Right ascension is stored in degrees and always lies in [0°, 360°);
/// declination is in degrees, north positive. `radius` is a distance in
/// whatever unit the producer chose (km for the moon and sun, 1 for the
/// unit sphere).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EquatorialRepr", into = "EquatorialRepr"))]
pub struct EquatorialCoords {
    right_ascension: f64,
    declination: f64,
    radius: f64,
}

impl Default for EquatorialCoords {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl EquatorialCoords {
    /// Unit-sphere position; right ascension is wrapped into [0°, 360°).
    pub fn new(right_ascension: f64, declination: f64) -> Self {
        Self::with_radius(right_ascension, declination, 1.0)
    }

    pub fn with_radius(right_ascension: f64, declination: f64, radius: f64) -> Self {
        Self {
            right_ascension: revd(right_ascension),
            declination,
            radius,
        }
    }

    /// Right ascension given in hours.
    pub fn from_hours(right_ascension_hours: f64, declination: f64) -> Self {
        Self::new(right_ascension_hours * 15.0, declination)
    }

    #[inline]
    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    #[inline]
    pub fn right_ascension_hours(&self) -> f64 {
        self.right_ascension / 15.0
    }

    #[inline]
    pub fn declination(&self) -> f64 {
        self.declination
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Hour angle for a local sidereal time in hours; degrees in [-180°, 180°), west positive.
    pub fn hour_angle(&self, local_sidereal_time: f64) -> f64 {
        revd_pm(local_sidereal_time * 15.0 - self.right_ascension)
    }

    /// Converts to ecliptic coordinates for an obliquity in degrees (Meeus 13.1, 13.2).
    pub fn to_ecliptic(&self, obliquity: f64) -> EclipticCoords {
        let (sin_a, cos_a) = (sin_deg(self.right_ascension), cos_deg(self.right_ascension));
        let (sin_d, cos_d) = (sin_deg(self.declination), cos_deg(self.declination));
        let (sin_e, cos_e) = (sin_deg(obliquity), cos_deg(obliquity));

        let longitude = atan2_deg(sin_a * cos_d * cos_e + sin_d * sin_e, cos_a * cos_d);
        let latitude = asin_deg(sin_d * cos_e - cos_d * sin_e * sin_a);

        EclipticCoords::with_radius(longitude, latitude, self.radius)
    }

    /// Converts to horizontal coordinates (azimuth from north through east).
    ///
    /// `local_sidereal_time` is in hours, `latitude` in degrees. The azimuth
    /// comes from `atan2`, so every quadrant is resolved without the
    /// ambiguity of an `acos`-based formula.
    pub fn to_horizontal(&self, local_sidereal_time: f64, latitude: f64) -> HorizontalCoords {
        let h = self.hour_angle(local_sidereal_time);
        let (sin_h, cos_h) = (sin_deg(h), cos_deg(h));
        let (sin_d, cos_d) = (sin_deg(self.declination), cos_deg(self.declination));
        let (sin_p, cos_p) = (sin_deg(latitude), cos_deg(latitude));

        let azimuth = atan2_deg(-cos_d * sin_h, cos_p * sin_d - sin_p * cos_d * cos_h);
        let altitude = asin_deg(sin_p * sin_d + cos_p * cos_d * cos_h);

        HorizontalCoords::with_radius(azimuth, altitude, self.radius)
    }

    /// Unit vector: x toward the equinox, z toward the north celestial pole.
    pub fn to_unit_vector(&self) -> Vector3 {
        Vector3::from_spherical_deg(self.right_ascension, self.declination)
    }

    /// Position vector scaled by `radius`.
    pub fn to_vector(&self) -> Vector3 {
        self.to_unit_vector() * self.radius
    }

    /// Inverse of [`to_vector`](Self::to_vector); the magnitude becomes the radius.
    pub fn from_vector(v: &Vector3) -> Self {
        let (ra, dec) = v.to_spherical_deg();
        Self::with_radius(ra, dec, v.magnitude())
    }

    /// Great-circle separation in degrees (Vincenty formula).
    pub fn angular_separation(&self, other: &Self) -> f64 {
        let (sin_d1, cos_d1) = libm::sincos(self.declination * DEG_TO_RAD);
        let (sin_d2, cos_d2) = libm::sincos(other.declination * DEG_TO_RAD);
        let delta = (other.right_ascension - self.right_ascension) * DEG_TO_RAD;
        vincenty_angular_separation(sin_d1, cos_d1, sin_d2, cos_d2, delta) / DEG_TO_RAD
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct EquatorialRepr {
    right_ascension: f64,
    declination: f64,
    #[serde(default = "unit_radius")]
    radius: f64,
}

#[cfg(feature = "serde")]
fn unit_radius() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<EquatorialRepr> for EquatorialCoords {
    fn from(repr: EquatorialRepr) -> Self {
        Self::with_radius(repr.right_ascension, repr.declination, repr.radius)
    }
}

#[cfg(feature = "serde")]
impl From<EquatorialCoords> for EquatorialRepr {
    fn from(coords: EquatorialCoords) -> Self {
        Self {
            right_ascension: coords.right_ascension,
            declination: coords.declination,
            radius: coords.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_right_ascension_is_wrapped() {
        assert_eq!(EquatorialCoords::new(-10.0, 0.0).right_ascension(), 350.0);
        assert_eq!(EquatorialCoords::new(370.0, 0.0).right_ascension(), 10.0);
        assert_eq!(EquatorialCoords::from_hours(6.0, 0.0).right_ascension(), 90.0);
    }

    #[test]
    fn test_pollux_to_ecliptic() {
        // Meeus example 13.a
        let pollux = EquatorialCoords::new(116.328942, 28.026183);
        let ecl = pollux.to_ecliptic(23.4392911);
        assert_abs_diff_eq!(ecl.longitude(), 113.215630, epsilon = 1e-5);
        assert_abs_diff_eq!(ecl.latitude(), 6.684170, epsilon = 1e-5);
    }

    #[test]
    fn test_hour_angle_sign() {
        let star = EquatorialCoords::new(90.0, 0.0);
        // Transited one hour ago: west of meridian, positive
        assert_abs_diff_eq!(star.hour_angle(7.0), 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(star.hour_angle(5.0), -15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_meeus_13b_horizontal() {
        // Venus from the US Naval Observatory: H = 64.352133°, azimuth 68.0337° from south
        let ra = 347.3193375;
        let lst = (ra + 64.352133) / 15.0;
        let latitude = 38.0 + 55.0 / 60.0 + 17.0 / 3600.0;
        let venus = EquatorialCoords::new(ra, -(6.0 + 43.0 / 60.0 + 11.61 / 3600.0));
        let hor = venus.to_horizontal(lst, latitude);
        assert_abs_diff_eq!(hor.azimuth(), 68.0337 + 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(hor.altitude(), 15.1249, epsilon = 1e-4);
    }

    #[test]
    fn test_angular_separation() {
        // Meeus example 17.a: Arcturus and Spica, 32.7930°
        let arcturus = EquatorialCoords::new(213.9154, 19.1825);
        let spica = EquatorialCoords::new(201.2983, -11.1614);
        assert_abs_diff_eq!(arcturus.angular_separation(&spica), 32.7930, epsilon = 1e-4);
        assert_eq!(spica.angular_separation(&spica), 0.0);
    }

    #[test]
    fn test_vector_round_trip_keeps_radius() {
        let moon = EquatorialCoords::with_radius(134.688470, 13.768368, 368409.7);
        let back = EquatorialCoords::from_vector(&moon.to_vector());
        assert_abs_diff_eq!(back.right_ascension(), moon.right_ascension(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.declination(), moon.declination(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.radius(), 368409.7, epsilon = 1e-6);
    }
}
