//! 3D Cartesian vectors.
//!
//! Sky positions leave the engine as unit vectors: shader uniforms for the sun
//! and moon direction, and the basis of the star-sphere matrix. Spherical
//! helpers take **degrees** because every model upstream works in degrees.
//!
//! The spherical convention matches astronomical practice: longitude-like
//! angle measured from +X toward +Y, latitude-like angle from the XY plane.
//!
//! ```
//! use firmament_core::Vector3;
//!
//! let v = Vector3::from_spherical_deg(90.0, 0.0);
//! assert!((v.y - 1.0).abs() < 1e-15);
//!
//! let (lon, lat) = Vector3::new(0.0, 0.0, 2.0).to_spherical_deg();
//! assert_eq!((lon, lat), (0.0, 90.0));
//! ```

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};
use std::fmt;

/// A 3D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// The zero vector is returned unchanged instead of producing NaN.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between two directions in degrees, stable near 0° and 180°.
    pub fn angle_to_deg(&self, other: &Self) -> f64 {
        let sin = self.cross(other).magnitude();
        let cos = self.dot(other);
        libm::atan2(sin, cos) * RAD_TO_DEG
    }

    /// Unit vector for a longitude-like and a latitude-like angle in degrees.
    pub fn from_spherical_deg(lon: f64, lat: f64) -> Self {
        let (sin_lon, cos_lon) = libm::sincos(lon * DEG_TO_RAD);
        let (sin_lat, cos_lat) = libm::sincos(lat * DEG_TO_RAD);
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Inverse of [`from_spherical_deg`](Self::from_spherical_deg).
    ///
    /// Returns `(lon, lat)` with `lon` in [0°, 360°) and `lat` in [-90°, 90°].
    /// The vector need not be normalized. The zero vector maps to `(0, 0)`.
    pub fn to_spherical_deg(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;

        let lon = if d2 == 0.0 {
            0.0
        } else {
            crate::angle::revd(libm::atan2(self.y, self.x) * RAD_TO_DEG)
        };
        let lat = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2)) * RAD_TO_DEG
        };

        (lon, lat)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Single-precision components, the layout shader uniforms expect.
    #[inline]
    pub fn to_f32_array(&self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_and_zero() {
        let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
        assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
        assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
    }

    #[test]
    fn test_cross_follows_right_hand_rule() {
        assert_eq!(Vector3::x_axis().cross(&Vector3::y_axis()), Vector3::z_axis());
        assert_eq!(Vector3::y_axis().cross(&Vector3::x_axis()), -Vector3::z_axis());
    }

    #[test]
    fn test_spherical_deg_round_trip() {
        for (lon, lat) in [(0.0, 0.0), (123.4, -56.7), (359.0, 89.0), (200.0, 10.0)] {
            let v = Vector3::from_spherical_deg(lon, lat);
            assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-15);
            let (lon2, lat2) = v.to_spherical_deg();
            assert_abs_diff_eq!(lon2, lon, epsilon = 1e-10);
            assert_abs_diff_eq!(lat2, lat, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_negative_longitude_is_wrapped() {
        let (lon, _) = Vector3::new(1.0, -1.0, 0.0).to_spherical_deg();
        assert_abs_diff_eq!(lon, 315.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_to() {
        let a = Vector3::from_spherical_deg(10.0, 0.0);
        let b = Vector3::from_spherical_deg(40.0, 0.0);
        assert_abs_diff_eq!(a.angle_to_deg(&b), 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle_to_deg(&-a), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.to_f32_array(), [1.0f32, 2.0, 3.0]);
    }
}
