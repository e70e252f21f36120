//! 3×3 rotation matrices.
//!
//! Rotations follow the ERFA sign convention: `rotate_z(ψ)` rotates the
//! *coordinate frame* by +ψ, so a fixed vector appears to turn by −ψ. This is
//! the form in which frame changes (equatorial → hour angle → horizontal) are
//! written in the literature.
//!
//! ```text
//! Rz(ψ) = | cos ψ   sin ψ   0 |
//!         |−sin ψ   cos ψ   0 |
//!         |   0       0     1 |
//! ```

use super::Vector3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from row-major elements without checking orthogonality.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Creates the matrix whose columns are the given vectors.
    ///
    /// With an orthonormal basis `(x, y, z)` expressed in frame B, the result
    /// maps coordinates in that basis into frame B.
    pub fn from_columns(x: Vector3, y: Vector3, z: Vector3) -> Self {
        Self::from_array([[x.x, y.x, z.x], [x.y, y.y, z.y], [x.z, y.z, z.z]])
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Frame rotation about X, radians.
    pub fn rotation_x(phi: f64) -> Self {
        let mut m = Self::identity();
        m.rotate_x(phi);
        m
    }

    /// Frame rotation about Y, radians.
    pub fn rotation_y(theta: f64) -> Self {
        let mut m = Self::identity();
        m.rotate_y(theta);
        m
    }

    /// Frame rotation about Z, radians.
    pub fn rotation_z(psi: f64) -> Self {
        let mut m = Self::identity();
        m.rotate_z(psi);
        m
    }

    /// Replaces `self` with `Rx(phi) * self`.
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);
        let [_, r1, r2] = self.elements;
        for j in 0..3 {
            self.elements[1][j] = c * r1[j] + s * r2[j];
            self.elements[2][j] = -s * r1[j] + c * r2[j];
        }
    }

    /// Replaces `self` with `Ry(theta) * self`.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);
        let [r0, _, r2] = self.elements;
        for j in 0..3 {
            self.elements[0][j] = c * r0[j] - s * r2[j];
            self.elements[2][j] = s * r0[j] + c * r2[j];
        }
    }

    /// Replaces `self` with `Rz(psi) * self`.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);
        let [r0, r1, _] = self.elements;
        for j in 0..3 {
            self.elements[0][j] = c * r0[j] + s * r1[j];
            self.elements[1][j] = -s * r0[j] + c * r1[j];
        }
    }

    /// Matrix product `self * other` (`other` applied first).
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn apply(&self, v: &Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// The inverse rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// True if `M·Mᵀ = I` and `det M = +1` within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let product = self.multiply(&self.transpose());
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                if (product.elements[i][j] - expected).abs() > tolerance {
                    return false;
                }
            }
        }
        (self.determinant() - 1.0).abs() <= tolerance
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply(&rhs)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(f, "[{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vector3, b: Vector3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-15);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-15);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-15);
    }

    #[test]
    fn test_frame_rotations_turn_vectors_backwards() {
        let rz = RotationMatrix3::rotation_z(FRAC_PI_2);
        assert_vec_eq(rz * Vector3::x_axis(), -Vector3::y_axis());

        let rx = RotationMatrix3::rotation_x(FRAC_PI_2);
        assert_vec_eq(rx * Vector3::y_axis(), -Vector3::z_axis());

        let ry = RotationMatrix3::rotation_y(FRAC_PI_2);
        assert_vec_eq(ry * Vector3::z_axis(), -Vector3::x_axis());
    }

    #[test]
    fn test_transpose_inverts() {
        let m = RotationMatrix3::rotation_z(0.5) * RotationMatrix3::rotation_x(0.3);
        assert!(m.is_rotation_matrix(1e-14));
        let v = Vector3::new(1.0, 2.0, 3.0);
        let back = m.transpose() * (m * v);
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-14);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-14);
        assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-14);
    }

    #[test]
    fn test_from_columns_maps_basis() {
        let m = RotationMatrix3::from_columns(
            Vector3::y_axis(),
            Vector3::z_axis(),
            Vector3::x_axis(),
        );
        assert_eq!(m * Vector3::x_axis(), Vector3::y_axis());
        assert_eq!(m * Vector3::z_axis(), Vector3::x_axis());
        assert!(m.is_rotation_matrix(0.0));
    }

    #[test]
    fn test_reflection_is_not_rotation() {
        let m = RotationMatrix3::from_array([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!m.is_rotation_matrix(1e-12));
    }
}
