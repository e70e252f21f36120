//! Horizontal (altitude-azimuth) coordinates.
//!
//! Azimuth is measured from north through east unless stated otherwise.
//! Some traditions (Meeus among them) count from south; [`AzimuthConvention`]
//! converts between the two at the boundary.

use crate::equatorial::EquatorialCoords;
use firmament_core::angle::{asin_deg, atan2_deg, cos_deg, revd, sin_deg};
use firmament_core::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AzimuthConvention {
    /// North = 0°, east = 90°.
    #[default]
    FromNorth,
    /// South = 0°, west = 90°.
    FromSouth,
}

impl AzimuthConvention {
    /// Converts an azimuth in this convention to north-based degrees in [0°, 360°).
    pub fn to_north(self, azimuth: f64) -> f64 {
        match self {
            AzimuthConvention::FromNorth => revd(azimuth),
            AzimuthConvention::FromSouth => revd(azimuth + 180.0),
        }
    }

    /// Converts a north-based azimuth into this convention, in [0°, 360°).
    pub fn from_north(self, azimuth: f64) -> f64 {
        match self {
            AzimuthConvention::FromNorth => revd(azimuth),
            AzimuthConvention::FromSouth => revd(azimuth - 180.0),
        }
    }
}

/// Azimuth and altitude in degrees. Azimuth is north-based and lies in [0°, 360°).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "HorizontalRepr", into = "HorizontalRepr"))]
pub struct HorizontalCoords {
    azimuth: f64,
    altitude: f64,
    radius: f64,
}

impl Default for HorizontalCoords {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl HorizontalCoords {
    pub fn new(azimuth: f64, altitude: f64) -> Self {
        Self::with_radius(azimuth, altitude, 1.0)
    }

    pub fn with_radius(azimuth: f64, altitude: f64, radius: f64) -> Self {
        Self {
            azimuth: revd(azimuth),
            altitude,
            radius,
        }
    }

    /// Builds from an azimuth expressed in `convention`.
    pub fn from_convention(azimuth: f64, altitude: f64, convention: AzimuthConvention) -> Self {
        Self::new(convention.to_north(azimuth), altitude)
    }

    #[inline]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Azimuth expressed in `convention`.
    pub fn azimuth_in(&self, convention: AzimuthConvention) -> f64 {
        convention.from_north(self.azimuth)
    }

    #[inline]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn zenith_distance(&self) -> f64 {
        90.0 - self.altitude
    }

    #[inline]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }

    /// Copy with a different altitude, e.g. after applying refraction.
    pub fn with_altitude(&self, altitude: f64) -> Self {
        Self {
            altitude,
            ..*self
        }
    }

    /// Converts back to equatorial coordinates for a local sidereal time in
    /// hours and a latitude in degrees.
    pub fn to_equatorial(&self, local_sidereal_time: f64, latitude: f64) -> EquatorialCoords {
        let (sin_a, cos_a) = (sin_deg(self.azimuth), cos_deg(self.azimuth));
        let (sin_h, cos_h) = (sin_deg(self.altitude), cos_deg(self.altitude));
        let (sin_p, cos_p) = (sin_deg(latitude), cos_deg(latitude));

        let dec = asin_deg(sin_p * sin_h + cos_p * cos_h * cos_a);
        let hour_angle = atan2_deg(-sin_a * cos_h, cos_p * sin_h - sin_p * cos_h * cos_a);

        EquatorialCoords::with_radius(local_sidereal_time * 15.0 - hour_angle, dec, self.radius)
    }

    /// Unit vector in the local frame: x east, y north, z zenith.
    pub fn to_unit_vector(&self) -> Vector3 {
        let (sin_a, cos_a) = (sin_deg(self.azimuth), cos_deg(self.azimuth));
        let (sin_h, cos_h) = (sin_deg(self.altitude), cos_deg(self.altitude));
        Vector3::new(cos_h * sin_a, cos_h * cos_a, sin_h)
    }

    pub fn to_vector(&self) -> Vector3 {
        self.to_unit_vector() * self.radius
    }

    /// Inverse of [`to_vector`](Self::to_vector).
    pub fn from_vector(v: &Vector3) -> Self {
        let horizontal = libm::sqrt(v.x * v.x + v.y * v.y);
        let azimuth = if horizontal == 0.0 {
            0.0
        } else {
            atan2_deg(v.x, v.y)
        };
        let altitude = if v.z == 0.0 {
            0.0
        } else {
            atan2_deg(v.z, horizontal)
        };
        Self::with_radius(azimuth, altitude, v.magnitude())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct HorizontalRepr {
    azimuth: f64,
    altitude: f64,
    #[serde(default = "unit_radius")]
    radius: f64,
}

#[cfg(feature = "serde")]
fn unit_radius() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<HorizontalRepr> for HorizontalCoords {
    fn from(repr: HorizontalRepr) -> Self {
        Self::with_radius(repr.azimuth, repr.altitude, repr.radius)
    }
}

#[cfg(feature = "serde")]
impl From<HorizontalCoords> for HorizontalRepr {
    fn from(coords: HorizontalCoords) -> Self {
        Self {
            azimuth: coords.azimuth,
            altitude: coords.altitude,
            radius: coords.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_convention_conversions() {
        assert_eq!(AzimuthConvention::FromSouth.to_north(0.0), 180.0);
        assert_eq!(AzimuthConvention::FromSouth.to_north(270.0), 90.0);
        assert_eq!(AzimuthConvention::FromSouth.from_north(90.0), 270.0);
        assert_eq!(AzimuthConvention::FromNorth.to_north(-90.0), 270.0);

        let h = HorizontalCoords::from_convention(68.0337, 15.1249, AzimuthConvention::FromSouth);
        assert_abs_diff_eq!(h.azimuth(), 248.0337, epsilon = 1e-9);
        assert_abs_diff_eq!(
            h.azimuth_in(AzimuthConvention::FromSouth),
            68.0337,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_unit_vector_axes() {
        let east = HorizontalCoords::new(90.0, 0.0).to_unit_vector();
        assert_abs_diff_eq!(east.x, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(east.y, 0.0, epsilon = 1e-15);

        let north = HorizontalCoords::new(0.0, 0.0).to_unit_vector();
        assert_abs_diff_eq!(north.y, 1.0, epsilon = 1e-15);

        let zenith = HorizontalCoords::new(123.0, 90.0).to_unit_vector();
        assert_abs_diff_eq!(zenith.z, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_vector_round_trip() {
        for &(az, alt) in &[(0.0, 0.0), (45.0, 30.0), (180.85, 15.26), (300.0, -20.0)] {
            let h = HorizontalCoords::with_radius(az, alt, 3.0);
            let back = HorizontalCoords::from_vector(&h.to_vector());
            assert_abs_diff_eq!(back.azimuth(), az, epsilon = 1e-9);
            assert_abs_diff_eq!(back.altitude(), alt, epsilon = 1e-9);
            assert_abs_diff_eq!(back.radius(), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_round_trip_through_equatorial() {
        let latitude = 52.52;
        let lst = 17.25;
        for &(ra, dec) in &[(10.0, 20.0), (200.0, -30.0), (300.0, 75.0), (95.0, -5.0)] {
            let eq = EquatorialCoords::new(ra, dec);
            let back = eq.to_horizontal(lst, latitude).to_equatorial(lst, latitude);
            assert_abs_diff_eq!(back.right_ascension(), ra, epsilon = 1e-9);
            assert_abs_diff_eq!(back.declination(), dec, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_celestial_pole_altitude_equals_latitude() {
        let pole = EquatorialCoords::new(0.0, 90.0);
        let h = pole.to_horizontal(3.0, 48.0);
        assert_abs_diff_eq!(h.altitude(), 48.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h.azimuth(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transit_is_due_south() {
        let star = EquatorialCoords::new(150.0, 10.0);
        let h = star.to_horizontal(10.0, 50.0);
        assert_abs_diff_eq!(h.azimuth(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(h.altitude(), 50.0, epsilon = 1e-9);
    }
}
