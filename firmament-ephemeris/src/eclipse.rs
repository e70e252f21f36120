//! Eclipse geometry from the positions of the sun and moon.
//!
//! Lunar eclipses use the Danjon rule: the Earth's shadow cone is enlarged
//! by 2% for the atmosphere. Solar overlap works on whatever pair of
//! positions it is given; feed it topocentric positions for a local view.

use crate::moon::Moon;
use crate::sun::Sun;
use firmament_core::angle::{asin_deg, atan_deg, revd};
use firmament_core::constants::{
    AU_KM, EARTH_EQUATORIAL_RADIUS_KM, MOON_MEAN_RADIUS_KM, SUN_MEAN_RADIUS_KM,
    SUN_PARALLAX_ARCSEC,
};
use firmament_core::Precision;
use firmament_coords::EquatorialCoords;
use firmament_time::JulianDay;

const DANJON_ENLARGEMENT: f64 = 1.02;
/// Ratio of the polar to the equatorial parallax used for the shadow radius.
const SHADOW_PARALLAX_FACTOR: f64 = 0.99834;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarEclipseKind {
    None,
    Penumbral,
    Partial,
    Total,
}

/// Shadow geometry at the moon's distance. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarEclipse {
    pub kind: LunarEclipseKind,
    pub umbra_radius: f64,
    pub penumbra_radius: f64,
    pub moon_radius: f64,
    /// Distance of the moon's centre from the anti-solar point.
    pub shadow_distance: f64,
    /// Fraction of the moon's diameter inside the umbra; negative outside.
    pub umbral_magnitude: f64,
    pub penumbral_magnitude: f64,
}

impl LunarEclipse {
    /// Geometry for apparent geocentric positions with radii in km.
    pub fn from_positions(sun: &EquatorialCoords, moon: &EquatorialCoords) -> Self {
        let moon_parallax = asin_deg(EARTH_EQUATORIAL_RADIUS_KM / moon.radius());
        let sun_parallax = SUN_PARALLAX_ARCSEC / 3600.0 / (sun.radius() / AU_KM);
        let sun_radius = atan_deg(SUN_MEAN_RADIUS_KM / sun.radius());
        let moon_radius = atan_deg(MOON_MEAN_RADIUS_KM / moon.radius());

        let umbra_radius =
            DANJON_ENLARGEMENT * (SHADOW_PARALLAX_FACTOR * moon_parallax - sun_radius + sun_parallax);
        let penumbra_radius =
            DANJON_ENLARGEMENT * (SHADOW_PARALLAX_FACTOR * moon_parallax + sun_radius + sun_parallax);

        let anti_solar = EquatorialCoords::new(revd(sun.right_ascension() + 180.0), -sun.declination());
        let shadow_distance = moon.angular_separation(&anti_solar);

        let kind = if shadow_distance + moon_radius <= umbra_radius {
            LunarEclipseKind::Total
        } else if shadow_distance - moon_radius < umbra_radius {
            LunarEclipseKind::Partial
        } else if shadow_distance - moon_radius < penumbra_radius {
            LunarEclipseKind::Penumbral
        } else {
            LunarEclipseKind::None
        };

        Self {
            kind,
            umbra_radius,
            penumbra_radius,
            moon_radius,
            shadow_distance,
            umbral_magnitude: (umbra_radius + moon_radius - shadow_distance) / (2.0 * moon_radius),
            penumbral_magnitude: (penumbra_radius + moon_radius - shadow_distance)
                / (2.0 * moon_radius),
        }
    }

    pub fn is_eclipse(&self) -> bool {
        self.kind != LunarEclipseKind::None
    }
}

/// Lunar eclipse geometry at `jd`.
pub fn lunar_eclipse(jd: JulianDay, precision: Precision) -> LunarEclipse {
    let sun = Sun::new(precision).apparent_position(jd);
    let moon = Moon::new(precision).apparent_position(jd);
    LunarEclipse::from_positions(&sun, &moon)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarOverlapKind {
    None,
    Partial,
    Annular,
    Total,
}

/// Overlap of the solar and lunar disks. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarOverlap {
    pub kind: SolarOverlapKind,
    pub separation: f64,
    pub sun_radius: f64,
    pub moon_radius: f64,
    /// Fraction of the sun's diameter covered, zero without contact.
    pub magnitude: f64,
}

impl SolarOverlap {
    pub fn from_angles(separation: f64, sun_radius: f64, moon_radius: f64) -> Self {
        let kind = if separation >= sun_radius + moon_radius {
            SolarOverlapKind::None
        } else if separation <= moon_radius - sun_radius {
            SolarOverlapKind::Total
        } else if separation <= sun_radius - moon_radius {
            SolarOverlapKind::Annular
        } else {
            SolarOverlapKind::Partial
        };

        Self {
            kind,
            separation,
            sun_radius,
            moon_radius,
            magnitude: ((sun_radius + moon_radius - separation) / (2.0 * sun_radius)).max(0.0),
        }
    }

    pub fn is_eclipse(&self) -> bool {
        self.kind != SolarOverlapKind::None
    }
}

/// Disk overlap for two positions with radii in km.
pub fn solar_overlap(sun: &EquatorialCoords, moon: &EquatorialCoords) -> SolarOverlap {
    SolarOverlap::from_angles(
        sun.angular_separation(moon),
        atan_deg(SUN_MEAN_RADIUS_KM / sun.radius()),
        atan_deg(MOON_MEAN_RADIUS_KM / moon.radius()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use firmament_time::CalendarTime;

    fn at(year: i32, month: u32, day: f64, hour: u32, minute: u32) -> JulianDay {
        CalendarTime::new(year, month, day, hour, minute, 0.0, 0).to_julian_day()
    }

    #[test]
    fn test_total_lunar_eclipse_2022_11_08() {
        let e = lunar_eclipse(at(2022, 11, 8.0, 10, 59), Precision::High);
        assert_eq!(e.kind, LunarEclipseKind::Total);
        // Published umbral magnitude 1.359
        assert_abs_diff_eq!(e.umbral_magnitude, 1.359, epsilon = 0.02);
    }

    #[test]
    fn test_partial_lunar_eclipse_2023_10_28() {
        let e = lunar_eclipse(at(2023, 10, 28.0, 20, 14), Precision::High);
        assert_eq!(e.kind, LunarEclipseKind::Partial);
        assert_abs_diff_eq!(e.umbral_magnitude, 0.122, epsilon = 0.02);
    }

    #[test]
    fn test_penumbral_lunar_eclipse_2024_03_25() {
        let e = lunar_eclipse(at(2024, 3, 25.0, 7, 13), Precision::High);
        assert_eq!(e.kind, LunarEclipseKind::Penumbral);
        assert_abs_diff_eq!(e.penumbral_magnitude, 0.956, epsilon = 0.05);
    }

    #[test]
    fn test_no_lunar_eclipse_at_new_moon() {
        let e = lunar_eclipse(at(2024, 4, 8.0, 18, 18), Precision::High);
        assert_eq!(e.kind, LunarEclipseKind::None);
        assert!(!e.is_eclipse());
        assert!(e.shadow_distance > 179.0);
    }

    #[test]
    fn test_shadow_radii() {
        let e = lunar_eclipse(at(2022, 11, 8.0, 10, 59), Precision::High);
        assert!(e.umbra_radius > 0.6 && e.umbra_radius < 0.8);
        assert!(e.penumbra_radius > e.umbra_radius + 2.0 * 0.25);
    }

    #[test]
    fn test_geocentric_solar_overlap_2024_04_08() {
        // Total along the path, but the geocentric disks only overlap partially
        let jd = at(2024, 4, 8.0, 18, 18);
        let sun = Sun::new(Precision::High).apparent_position(jd);
        let moon = Moon::new(Precision::High).apparent_position(jd);
        let overlap = solar_overlap(&sun, &moon);
        assert_eq!(overlap.kind, SolarOverlapKind::Partial);
        assert!(overlap.separation < 0.4);
        assert!(overlap.moon_radius > overlap.sun_radius);
    }

    #[test]
    fn test_overlap_classification() {
        assert_eq!(SolarOverlap::from_angles(1.0, 0.27, 0.26).kind, SolarOverlapKind::None);
        assert_eq!(SolarOverlap::from_angles(0.3, 0.27, 0.26).kind, SolarOverlapKind::Partial);
        assert_eq!(SolarOverlap::from_angles(0.005, 0.27, 0.26).kind, SolarOverlapKind::Annular);
        assert_eq!(SolarOverlap::from_angles(0.005, 0.26, 0.28).kind, SolarOverlapKind::Total);
        assert_eq!(SolarOverlap::from_angles(1.0, 0.27, 0.26).magnitude, 0.0);
        assert_abs_diff_eq!(
            SolarOverlap::from_angles(0.0, 0.26, 0.28).magnitude,
            (0.26 + 0.28) / 0.52,
            epsilon = 1e-12
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_eclipse_serializes_kind_by_name() {
        let e = lunar_eclipse(at(2022, 11, 8.0, 10, 59), Precision::High);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"Total\""));

        let back: LunarEclipse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, LunarEclipseKind::Total);
        assert_abs_diff_eq!(back.umbral_magnitude, e.umbral_magnitude, epsilon = 1e-12);
    }
}
