//! Sidereal time: the rotation phase between the celestial sphere and the
//! observer's horizon.
//!
//! Mean sidereal time at Greenwich follows Meeus equation 12.4, a polynomial
//! in the Julian Day itself (not only in centuries) so the daily rotation term
//! keeps full precision:
//!
//! ```text
//! θ₀ = 280.46061837° + 360.98564736629° (JD − 2451545.0)
//!      + 0.000387933° T² − T³ / 38710000
//! ```
//!
//! All functions return hours in [0, 24).

use crate::calendar::CalendarTime;
use crate::julian::JulianDay;
use firmament_core::angle::{revd, revh};
use firmament_core::constants::{DEG_TO_RAD, J2000_JD};
use std::fmt;

/// Mean sidereal time at Greenwich for a (UT) Julian Day, in hours.
pub fn mean_sidereal_time(jd: JulianDay) -> f64 {
    let t = jd.centuries_since_j2000();
    let theta = 280.46061837 + 360.98564736629 * (jd.value() - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;
    revd(theta) / 15.0
}

/// Greenwich mean sidereal time of the instant; the UTC offset is removed first.
///
/// ```
/// use firmament_time::{sidereal_time, CalendarTime};
///
/// // Meeus example 12.a: 13h10m46.3668s
/// let st = sidereal_time(&CalendarTime::date(1987, 4, 10.0));
/// assert!((st - (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0)).abs() < 1e-8);
/// ```
pub fn sidereal_time(time: &CalendarTime) -> f64 {
    mean_sidereal_time(time.to_julian_day_utc())
}

/// Local mean sidereal time for an east-positive longitude in degrees.
pub fn local_sidereal_time(time: &CalendarTime, longitude: f64) -> f64 {
    revh(sidereal_time(time) + longitude / 15.0)
}

/// Apparent sidereal time: mean sidereal time plus the equation of the equinoxes.
///
/// `nutation_longitude` (Δψ) and `true_obliquity` (ε) are in degrees.
pub fn apparent_sidereal_time(jd: JulianDay, nutation_longitude: f64, true_obliquity: f64) -> f64 {
    let equation_of_equinoxes = nutation_longitude * libm::cos(true_obliquity * DEG_TO_RAD) / 15.0;
    revh(mean_sidereal_time(jd) + equation_of_equinoxes)
}

/// A sidereal time in hours with unit conversions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiderealTime(f64);

impl SiderealTime {
    pub fn from_hours(hours: f64) -> Self {
        Self(revh(hours))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(revd(degrees) / 15.0)
    }

    pub fn greenwich_mean(jd: JulianDay) -> Self {
        Self(mean_sidereal_time(jd))
    }

    pub fn local_mean(time: &CalendarTime, longitude: f64) -> Self {
        Self(local_sidereal_time(time, longitude))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    pub fn degrees(&self) -> f64 {
        self.0 * 15.0
    }

    pub fn radians(&self) -> f64 {
        self.degrees() * DEG_TO_RAD
    }

    /// Hour angle of a right ascension (degrees), in [-180°, 180°); west positive.
    pub fn hour_angle_deg(&self, right_ascension: f64) -> f64 {
        firmament_core::angle::revd_pm(self.degrees() - right_ascension)
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0 * 3600.0;
        let h = libm::floor(total / 3600.0);
        let m = libm::floor((total - h * 3600.0) / 60.0);
        let s = total - h * 3600.0 - m * 60.0;
        write!(f, "{:02}h{:02}m{:07.4}s", h as u32, m as u32, s)
    }
}
