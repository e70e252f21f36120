//! Homogeneous 4×4 matrices for handing rotations to a renderer.

use super::{RotationMatrix3, Vector3};

/// Row-major 4×4 matrix.
///
/// Only the pieces a sky renderer needs: embedding a rotation, uniform
/// scaling, composition, and export in the column-major `f32` layout GPU
/// uniform buffers use.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    elements: [[f64; 4]; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4 {
    pub fn identity() -> Self {
        let mut elements = [[0.0; 4]; 4];
        for (i, row) in elements.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { elements }
    }

    pub fn from_array(elements: [[f64; 4]; 4]) -> Self {
        Self { elements }
    }

    /// Embeds a 3×3 rotation in the upper-left block.
    pub fn from_rotation(rotation: &RotationMatrix3) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            for j in 0..3 {
                m.elements[i][j] = rotation.get(i, j);
            }
        }
        m
    }

    pub fn from_scale(scale: f64) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            m.elements[i][i] = scale;
        }
        m
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 4]; 4] {
        &self.elements
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..4 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }
        Self::from_array(result)
    }

    pub fn transpose(&self) -> Self {
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.elements[j][i];
            }
        }
        Self::from_array(result)
    }

    /// Transforms a point (w = 1) and divides by the resulting w.
    pub fn transform_point(&self, p: &Vector3) -> Vector3 {
        let m = &self.elements;
        let row = |i: usize| m[i][0] * p.x + m[i][1] * p.y + m[i][2] * p.z + m[i][3];
        let w = row(3);
        let v = Vector3::new(row(0), row(1), row(2));
        if w != 0.0 && w != 1.0 {
            v / w
        } else {
            v
        }
    }

    /// Transforms a direction (w = 0); translation does not apply.
    pub fn transform_direction(&self, d: &Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * d.x + m[0][1] * d.y + m[0][2] * d.z,
            m[1][0] * d.x + m[1][1] * d.y + m[1][2] * d.z,
            m[2][0] * d.x + m[2][1] * d.y + m[2][2] * d.z,
        )
    }

    /// Column-major single-precision elements for a uniform buffer.
    pub fn to_cols_array_f32(&self) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = self.elements[row][col] as f32;
            }
        }
        out
    }
}

impl From<RotationMatrix3> for Matrix4 {
    fn from(rotation: RotationMatrix3) -> Self {
        Self::from_rotation(&rotation)
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotation_embedding_matches_3x3() {
        let r = RotationMatrix3::rotation_z(0.7) * RotationMatrix3::rotation_x(-0.2);
        let m = Matrix4::from(r);
        let v = Vector3::new(0.3, -0.4, 0.5);
        let a = r * v;
        let b = m.transform_direction(&v);
        let c = m.transform_point(&v);
        for (x, y) in [(a.x, b.x), (a.y, b.y), (a.z, b.z), (a.x, c.x), (a.z, c.z)] {
            assert_abs_diff_eq!(x, y, epsilon = 1e-15);
        }
        assert_eq!(m.get(3, 3), 1.0);
        assert_eq!(m.get(0, 3), 0.0);
    }

    #[test]
    fn test_scale_then_rotate() {
        let m = Matrix4::from(RotationMatrix3::identity()) * Matrix4::from_scale(2.0);
        assert_eq!(m.transform_point(&Vector3::new(1.0, 2.0, 3.0)), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_column_major_export() {
        let mut a = [[0.0; 4]; 4];
        a[0][3] = 5.0;
        let cols = Matrix4::from_array(a).to_cols_array_f32();
        assert_eq!(cols[12], 5.0);
        assert_eq!(Matrix4::from_array(a).transpose().get(3, 0), 5.0);
    }
}
