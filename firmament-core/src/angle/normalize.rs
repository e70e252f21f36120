//! Angle normalization.
//!
//! The sky models work in degrees and hours:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, longitudes, mean elements | [0°, 360°) | [`revd`] |
//! | Hour angle, signed longitude differences | [-180°, 180°) | [`revd_pm`] |
//! | Sidereal time | [0h, 24h) | [`revh`] |
//! | Declination, latitude | [-90°, 90°] | [`clamp_dec`] |
//!
//! # Wrapping vs Clamping
//!
//! **Wrapping** preserves the direction on the sphere: 370° and 10° are the same
//! direction. **Clamping** enforces physical limits: you cannot go "past" a pole.
//!
//! The wrapping functions use `libm::fmod` (via [`crate::math::fmod`]) rather than
//! relying on `%` semantics, then shift negative results into range.
//!
//! ```
//! use firmament_core::angle::{revd, revh, clamp_dec};
//!
//! assert_eq!(revd(-90.0), 270.0);
//! assert_eq!(revh(25.5), 1.5);
//! assert_eq!(clamp_dec(38.78), 38.78);
//! assert_eq!(clamp_dec(91.5), 90.0);
//! ```

use crate::math::fmod;

/// Wraps degrees to [0, 360).
///
/// Every mean element, longitude, right ascension and azimuth produced by the
/// engine passes through this function.
///
/// ```
/// use firmament_core::angle::revd;
///
/// assert_eq!(revd(370.0), 10.0);
/// assert_eq!(revd(-10.0), 350.0);
/// assert_eq!(revd(360.0), 0.0);
/// ```
#[inline]
pub fn revd(degrees: f64) -> f64 {
    let w = fmod(degrees, 360.0);
    if w < 0.0 {
        // -1e-17 + 360 rounds to 360
        let shifted = w + 360.0;
        if shifted >= 360.0 {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}

/// Wraps degrees to [-180, 180).
#[inline]
pub fn revd_pm(degrees: f64) -> f64 {
    let w = revd(degrees);
    if w >= 180.0 {
        w - 360.0
    } else {
        w
    }
}

/// Wraps hours to [0, 24).
#[inline]
pub fn revh(hours: f64) -> f64 {
    let w = fmod(hours, 24.0);
    if w < 0.0 {
        let shifted = w + 24.0;
        if shifted >= 24.0 {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}

/// Clamps a declination or latitude to [-90°, +90°].
#[inline]
pub fn clamp_dec(degrees: f64) -> f64 {
    degrees.clamp(-90.0, 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revd() {
        assert_eq!(revd(0.0), 0.0);
        assert_eq!(revd(359.5), 359.5);
        assert_eq!(revd(720.25), 0.25);
        assert_eq!(revd(-720.25), 359.75);
        assert_eq!(revd(-1e-17), 0.0);
        for x in [-1234.5, -360.0, -0.5, 0.0, 45.0, 359.999, 10000.0] {
            let r = revd(x);
            assert!((0.0..360.0).contains(&r), "revd({}) = {}", x, r);
        }
    }

    #[test]
    fn test_revd_is_idempotent() {
        for x in [-987.6, -12.0, 3.0, 400.0] {
            assert_eq!(revd(revd(x)), revd(x));
        }
    }

    #[test]
    fn test_revd_pm() {
        assert_eq!(revd_pm(190.0), -170.0);
        assert_eq!(revd_pm(-190.0), 170.0);
        assert_eq!(revd_pm(180.0), -180.0);
        assert_eq!(revd_pm(-45.0), -45.0);
    }

    #[test]
    fn test_revh() {
        assert_eq!(revh(24.0), 0.0);
        assert_eq!(revh(-1.0), 23.0);
        assert_eq!(revh(49.5), 1.5);
    }

    #[test]
    fn test_clamp_dec_is_in_degrees() {
        assert_eq!(clamp_dec(49.228), 49.228);
        assert_eq!(clamp_dec(-89.9), -89.9);
        assert_eq!(clamp_dec(90.5), 90.0);
        assert_eq!(clamp_dec(-123.0), -90.0);
    }
}
