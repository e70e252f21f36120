use crate::equatorial::EquatorialCoords;
use firmament_core::angle::{asin_deg, atan2_deg, cos_deg, revd, sin_deg};
use firmament_core::Vector3;

/// Ecliptic longitude and latitude in degrees, referred to the equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EclipticRepr", into = "EclipticRepr"))]
pub struct EclipticCoords {
    longitude: f64,
    latitude: f64,
    radius: f64,
}

impl Default for EclipticCoords {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl EclipticCoords {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self::with_radius(longitude, latitude, 1.0)
    }

    pub fn with_radius(longitude: f64, latitude: f64, radius: f64) -> Self {
        Self {
            longitude: revd(longitude),
            latitude,
            radius,
        }
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Converts to equatorial coordinates for an obliquity in degrees (Meeus 13.3, 13.4).
    pub fn to_equatorial(&self, obliquity: f64) -> EquatorialCoords {
        let (sin_l, cos_l) = (sin_deg(self.longitude), cos_deg(self.longitude));
        let (sin_b, cos_b) = (sin_deg(self.latitude), cos_deg(self.latitude));
        let (sin_e, cos_e) = (sin_deg(obliquity), cos_deg(obliquity));

        let ra = atan2_deg(sin_l * cos_b * cos_e - sin_b * sin_e, cos_l * cos_b);
        let dec = asin_deg(sin_b * cos_e + cos_b * sin_e * sin_l);

        EquatorialCoords::with_radius(ra, dec, self.radius)
    }

    pub fn to_unit_vector(&self) -> Vector3 {
        Vector3::from_spherical_deg(self.longitude, self.latitude)
    }

    pub fn to_vector(&self) -> Vector3 {
        self.to_unit_vector() * self.radius
    }

    pub fn from_vector(v: &Vector3) -> Self {
        let (lon, lat) = v.to_spherical_deg();
        Self::with_radius(lon, lat, v.magnitude())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct EclipticRepr {
    longitude: f64,
    latitude: f64,
    #[serde(default = "unit_radius")]
    radius: f64,
}

#[cfg(feature = "serde")]
fn unit_radius() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<EclipticRepr> for EclipticCoords {
    fn from(repr: EclipticRepr) -> Self {
        Self::with_radius(repr.longitude, repr.latitude, repr.radius)
    }
}

#[cfg(feature = "serde")]
impl From<EclipticCoords> for EclipticRepr {
    fn from(coords: EclipticCoords) -> Self {
        Self {
            longitude: coords.longitude,
            latitude: coords.latitude,
            radius: coords.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pollux_to_equatorial() {
        let ecl = EclipticCoords::new(113.215630, 6.684170);
        let eq = ecl.to_equatorial(23.4392911);
        assert_abs_diff_eq!(eq.right_ascension(), 116.328942, epsilon = 1e-5);
        assert_abs_diff_eq!(eq.declination(), 28.026183, epsilon = 1e-5);
    }

    #[test]
    fn test_ecliptic_pole_maps_to_fixed_point() {
        let pole = EclipticCoords::new(0.0, 90.0);
        let eq = pole.to_equatorial(23.44);
        assert_abs_diff_eq!(eq.right_ascension(), 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.declination(), 90.0 - 23.44, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip_through_equatorial() {
        for &(lon, lat) in &[(0.0, 0.0), (45.0, 5.0), (200.0, -60.0), (359.0, 89.0)] {
            let ecl = EclipticCoords::with_radius(lon, lat, 2.5);
            let back = ecl.to_equatorial(23.4392911).to_ecliptic(23.4392911);
            assert_abs_diff_eq!(back.longitude(), lon, epsilon = 1e-9);
            assert_abs_diff_eq!(back.latitude(), lat, epsilon = 1e-9);
            assert_eq!(back.radius(), 2.5);
        }
    }

    #[test]
    fn test_zero_obliquity_is_identity() {
        let ecl = EclipticCoords::new(123.0, -12.0);
        let eq = ecl.to_equatorial(0.0);
        assert_abs_diff_eq!(eq.right_ascension(), 123.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.declination(), -12.0, epsilon = 1e-12);
    }
}
