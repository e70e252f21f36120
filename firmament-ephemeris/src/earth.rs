//! Time-varying parameters of the Earth: orbit, obliquity, atmosphere.

use crate::nutation::{nutation, Nutation};
use firmament_core::angle::{revh, sin_deg, tan_deg};
use firmament_core::constants::{ATMOSPHERE_THICKNESS_EFFECTIVE_KM, EARTH_MEAN_RADIUS_KM};
use firmament_core::math::polynomial;
use firmament_core::Precision;
use firmament_time::{apparent_sidereal_time, local_sidereal_time, CalendarTime, JulianDay};

/// Laskar's coefficients in arcseconds for powers U¹…U¹⁰ of `U = T / 100`.
const LASKAR_OBLIQUITY_ARCSEC: [f64; 11] = [
    84_381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Lowest altitude, in degrees, at which the refraction formula is evaluated.
const REFRACTION_ALTITUDE_FLOOR: f64 = -1.0;

/// Eccentricity of the Earth's orbit (Meeus 25.4).
pub fn orbit_eccentricity(jd: JulianDay) -> f64 {
    let t = jd.centuries_since_j2000();
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t)
}

/// Mean obliquity of the ecliptic in degrees (Laskar, Meeus 22.3).
///
/// Valid over ±10000 years around J2000; accuracy degrades silently outside.
pub fn mean_obliquity(jd: JulianDay) -> f64 {
    let u = jd.centuries_since_j2000() / 100.0;
    polynomial(&LASKAR_OBLIQUITY_ARCSEC, u) / 3600.0
}

/// Δψ in degrees.
pub fn longitude_nutation(jd: JulianDay, precision: Precision) -> f64 {
    nutation(jd, precision).longitude
}

/// Δε in degrees.
pub fn obliquity_nutation(jd: JulianDay, precision: Precision) -> f64 {
    nutation(jd, precision).obliquity
}

/// Mean obliquity plus nutation in obliquity, degrees.
pub fn true_obliquity(jd: JulianDay, precision: Precision) -> f64 {
    mean_obliquity(jd) + obliquity_nutation(jd, precision)
}

/// True obliquity when the nutation is already at hand.
pub fn true_obliquity_with(jd: JulianDay, nutation: &Nutation) -> f64 {
    mean_obliquity(jd) + nutation.obliquity
}

/// Local sidereal time in hours for an observer at `longitude` degrees east.
///
/// The high tier adds the equation of the equinoxes (apparent sidereal time);
/// the low tier returns mean sidereal time.
pub fn observer_sidereal_time(time: &CalendarTime, longitude: f64, precision: Precision) -> f64 {
    match precision {
        Precision::High => {
            let jd = time.to_julian_day_utc();
            let n = nutation(jd, precision);
            let gast = apparent_sidereal_time(jd, n.longitude, true_obliquity_with(jd, &n));
            revh(gast + longitude / 15.0)
        }
        Precision::Low => local_sidereal_time(time, longitude),
    }
}

/// Apparent angular diameter in radians of a sphere of `mean_radius` at
/// `distance` (same length unit).
pub fn apparent_angular_diameter(distance: f64, mean_radius: f64) -> f64 {
    2.0 * libm::atan(mean_radius / distance)
}

/// Atmospheric refraction in degrees for an apparent altitude in degrees
/// (Bennett 1982).
///
/// Meant for objects above the horizon. Lower altitudes are evaluated at a
/// floor of -1°, which keeps the result finite. Do not combine with
/// refraction already applied by a renderer.
pub fn atmospheric_refraction(altitude: f64) -> f64 {
    let h = altitude.max(REFRACTION_ALTITUDE_FLOOR);
    let arcmin = 1.0 / tan_deg(h + 7.31 / (h + 4.4));
    arcmin / 60.0
}

/// Length in km of a ray leaving the surface at `altitude` degrees until it
/// exits the effective atmosphere shell.
pub fn view_distance_within_atmosphere(altitude: f64) -> f64 {
    let r = EARTH_MEAN_RADIUS_KM;
    let h = ATMOSPHERE_THICKNESS_EFFECTIVE_KM;
    let s = r * sin_deg(altitude);
    libm::sqrt(s * s + 2.0 * r * h + h * h) - s
}
