//! Physical and astronomical constants shared by every firmament crate.
//!
//! Angles are degrees unless the name says otherwise, distances are kilometres.

pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

/// Julian Day of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// First Julian Day number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_START_JDN: i64 = 2_299_161;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_PER_HOUR_F64: f64 = 3_600.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const CIRCULAR_ARCSECONDS: f64 = 1296000.0;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Astronomical Unit in kilometers (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Mean radius of the Earth, used for the atmosphere shell and parallax.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Equatorial radius of the Earth (Meeus), used for the lunar horizontal parallax.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Thickness of an atmosphere of uniform sea-level density.
pub const ATMOSPHERE_THICKNESS_UNIFORM_KM: f64 = 8.0;

/// Effective thickness of the non-uniform atmosphere used for scattering.
pub const ATMOSPHERE_THICKNESS_EFFECTIVE_KM: f64 = 85.0;

pub const MOON_MEAN_RADIUS_KM: f64 = 1737.1;

pub const SUN_MEAN_RADIUS_KM: f64 = 0.696e6;

/// Mean Earth-Moon distance (Meeus ch. 47 series origin).
pub const MOON_MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Inclination of the mean lunar equator to the ecliptic (IAU).
pub const MOON_EQUATOR_INCLINATION_DEG: f64 = 1.54242;

/// Equatorial horizontal parallax of the Sun at 1 AU, arcseconds.
pub const SUN_PARALLAX_ARCSEC: f64 = 8.794;

/// Constant of aberration times 1 AU, arcseconds (Meeus 25.10).
pub const SUN_ABERRATION_ARCSEC: f64 = 20.4898;
