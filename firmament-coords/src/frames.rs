//! Rotation matrices between the equatorial, ecliptic and local horizontal frames.
//!
//! Each matrix maps the unit vector of one frame onto the unit vector of
//! another, consistent with the scalar conversions on the coordinate types.

use firmament_core::constants::DEG_TO_RAD;
use firmament_core::{Matrix4, RotationMatrix3, Vector3};

/// Maps equatorial vectors (x toward the equinox, z toward the pole) onto
/// horizontal vectors (x east, y north, z zenith).
///
/// `local_sidereal_time` is in hours, `latitude` in degrees.
pub fn equatorial_to_horizontal_matrix(local_sidereal_time: f64, latitude: f64) -> RotationMatrix3 {
    // Rz(LST) yields (cos δ cos H, -cos δ sin H, sin δ)
    let hour_angle_frame = RotationMatrix3::rotation_z(local_sidereal_time * 15.0 * DEG_TO_RAD);

    let (sin_p, cos_p) = libm::sincos(latitude * DEG_TO_RAD);
    let local = RotationMatrix3::from_columns(
        Vector3::new(0.0, -sin_p, cos_p),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, cos_p, sin_p),
    );

    local * hour_angle_frame
}

pub fn horizontal_to_equatorial_matrix(local_sidereal_time: f64, latitude: f64) -> RotationMatrix3 {
    equatorial_to_horizontal_matrix(local_sidereal_time, latitude).transpose()
}

/// 4×4 homogeneous form of [`equatorial_to_horizontal_matrix`] for render pipelines.
pub fn equatorial_to_horizontal_matrix4(local_sidereal_time: f64, latitude: f64) -> Matrix4 {
    Matrix4::from(equatorial_to_horizontal_matrix(local_sidereal_time, latitude))
}

/// Maps ecliptic vectors onto equatorial vectors for an obliquity in degrees.
pub fn ecliptic_to_equatorial_matrix(obliquity: f64) -> RotationMatrix3 {
    RotationMatrix3::rotation_x(-obliquity * DEG_TO_RAD)
}
