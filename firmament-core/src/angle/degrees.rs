//! Trigonometry in degrees.
//!
//! Meeus states every series in degrees. These wrappers keep the model code
//! in the same unit as its coefficient tables. Arguments are reduced with
//! [`revd`] first so large mean elements keep their precision.

use super::normalize::revd;
use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

#[inline]
pub fn sin_deg(x: f64) -> f64 {
    libm::sin(revd(x) * DEG_TO_RAD)
}

#[inline]
pub fn cos_deg(x: f64) -> f64 {
    libm::cos(revd(x) * DEG_TO_RAD)
}

#[inline]
pub fn tan_deg(x: f64) -> f64 {
    libm::tan(revd(x) * DEG_TO_RAD)
}

/// Arc sine in degrees; the argument is clamped to [-1, 1] first.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0)) * RAD_TO_DEG
}

/// Arc cosine in degrees; the argument is clamped to [-1, 1] first.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    libm::acos(x.clamp(-1.0, 1.0)) * RAD_TO_DEG
}

#[inline]
pub fn atan_deg(x: f64) -> f64 {
    libm::atan(x) * RAD_TO_DEG
}

/// Four-quadrant arc tangent in degrees, range (-180, 180].
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    libm::atan2(y, x) * RAD_TO_DEG
}
