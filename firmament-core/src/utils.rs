//! Small conversions used throughout the engine.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`normalize_latitude`] | degrees | [-90°, 90°] (clamped) |
//! | [`clamp_longitude`] | degrees | [-180°, 180°] (clamped) |
//! | [`angular_difference`] | degrees | (-180°, 180°] |

/// Clamps latitude to the valid range [-90°, 90°].
#[inline]
pub fn normalize_latitude(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

/// Clamps longitude to [-180°, 180°].
///
/// Observer longitudes are clamped rather than wrapped so an out-of-range
/// value saturates at the date line instead of jumping across it.
#[inline]
pub fn clamp_longitude(lon: f64) -> f64 {
    lon.clamp(-180.0, 180.0)
}

/// Computes the shortest signed angular difference `a - b` in degrees.
///
/// ```
/// use firmament_core::utils::angular_difference;
///
/// assert_eq!(angular_difference(90.0, 45.0), 45.0);
/// assert!((angular_difference(10.0, 350.0) - 20.0).abs() < 1e-12);
/// ```
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let mut diff = (a - b) % 360.0;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff <= -180.0 {
        diff += 360.0;
    }
    diff
}
