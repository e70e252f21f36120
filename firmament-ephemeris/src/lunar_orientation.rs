//! Orientation and illumination of the lunar disk.
//!
//! Optical librations and the position angle of the axis follow Meeus
//! chapter 53 without the physical librations (a few hundredths of a degree).
//! The orientation matrix combines them with the moon's direction so a
//! renderer can place a body-fixed moon model into the local horizontal frame.

use crate::earth::{observer_sidereal_time, true_obliquity_with};
use crate::moon::{LunarArguments, Moon};
use crate::nutation::nutation;
use firmament_core::angle::{asin_deg, atan2_deg, cos_deg, revd, revd_pm, sin_deg, tan_deg};
use firmament_core::constants::MOON_EQUATOR_INCLINATION_DEG;
use firmament_core::{Matrix4, ObserverLocation, Precision, RotationMatrix3, Vector3};
use firmament_coords::{EclipticCoords, EquatorialCoords, HorizontalCoords};
use firmament_time::{CalendarTime, JulianDay};

/// Optical librations in degrees: selenographic coordinates of the mean sub-earth point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Librations {
    /// l′, positive when the mean centre of the disk moves west (Mare Crisium visible).
    pub longitude: f64,
    /// b′, positive when the north pole is tilted toward the Earth.
    pub latitude: f64,
}

/// Librations for an apparent ecliptic position of the moon.
///
/// `apparent` is the moon's apparent longitude/latitude, `nutation_longitude`
/// the Δψ that was added to it.
pub fn librations_for(
    args: &LunarArguments,
    apparent: &EclipticCoords,
    nutation_longitude: f64,
) -> Librations {
    let i = MOON_EQUATOR_INCLINATION_DEG;
    let w = apparent.longitude() - nutation_longitude - args.ascending_node;
    let beta = apparent.latitude();

    let a = atan2_deg(
        sin_deg(w) * cos_deg(beta) * cos_deg(i) - sin_deg(beta) * sin_deg(i),
        cos_deg(w) * cos_deg(beta),
    );

    Librations {
        longitude: revd_pm(a - args.argument_of_latitude),
        latitude: asin_deg(-sin_deg(w) * cos_deg(beta) * sin_deg(i) - sin_deg(beta) * cos_deg(i)),
    }
}

/// Optical librations at `jd`.
pub fn optical_librations(jd: JulianDay, precision: Precision) -> Librations {
    let dpsi = nutation(jd, precision).longitude;
    let apparent = Moon::new(precision).apparent_ecliptic(jd);
    librations_for(&LunarArguments::at(jd), &apparent, dpsi)
}

/// Position angle of the moon's axis of rotation in degrees, measured from
/// the north point of the disk toward the east.
pub fn position_angle_for(
    args: &LunarArguments,
    nutation_longitude: f64,
    true_obliquity: f64,
    right_ascension: f64,
    libration_latitude: f64,
) -> f64 {
    let i = MOON_EQUATOR_INCLINATION_DEG;
    let v = args.ascending_node + nutation_longitude;
    let x = sin_deg(i) * sin_deg(v);
    let y = sin_deg(i) * cos_deg(v) * cos_deg(true_obliquity) - cos_deg(i) * sin_deg(true_obliquity);
    let omega = atan2_deg(x, y);

    asin_deg(libm::sqrt(x * x + y * y) * cos_deg(right_ascension - omega) / cos_deg(libration_latitude))
}

pub fn position_angle(jd: JulianDay, precision: Precision) -> f64 {
    let n = nutation(jd, precision);
    let args = LunarArguments::at(jd);
    let moon = Moon::new(precision);
    let apparent = moon.apparent_ecliptic(jd);
    let eps = true_obliquity_with(jd, &n);
    let ra = apparent.to_equatorial(eps).right_ascension();
    let lib = librations_for(&args, &apparent, n.longitude);
    position_angle_for(&args, n.longitude, eps, ra, lib.latitude)
}

/// Parallactic angle q in degrees (Meeus 14.1): the angle at the object
/// between the directions to the celestial pole and to the zenith. Positive
/// west of the meridian.
pub fn parallactic_angle(hour_angle: f64, declination: f64, latitude: f64) -> f64 {
    atan2_deg(
        sin_deg(hour_angle),
        tan_deg(latitude) * cos_deg(declination) - sin_deg(declination) * cos_deg(hour_angle),
    )
}

/// Phase angle i in degrees, the sun-moon-earth angle (Meeus 48.2, 48.3).
///
/// Both positions must carry distances in the same unit.
pub fn phase_angle(sun: &EquatorialCoords, moon: &EquatorialCoords) -> f64 {
    let elongation = sun.angular_separation(moon);
    atan2_deg(
        sun.radius() * sin_deg(elongation),
        moon.radius() - sun.radius() * cos_deg(elongation),
    )
}

/// Illuminated fraction k of the disk for a phase angle in degrees.
pub fn illuminated_fraction(phase_angle: f64) -> f64 {
    (1.0 + cos_deg(phase_angle)) / 2.0
}

/// Position angle of the midpoint of the bright limb, degrees, from north through east (Meeus 48.5).
pub fn bright_limb_angle(sun: &EquatorialCoords, moon: &EquatorialCoords) -> f64 {
    let da = sun.right_ascension() - moon.right_ascension();
    revd(atan2_deg(
        cos_deg(sun.declination()) * sin_deg(da),
        sin_deg(sun.declination()) * cos_deg(moon.declination())
            - cos_deg(sun.declination()) * sin_deg(moon.declination()) * cos_deg(da),
    ))
}

/// Everything needed to orient a body-fixed moon model for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarOrientation {
    pub librations: Librations,
    /// Position angle of the axis, degrees.
    pub position_angle: f64,
    /// Parallactic angle at the observer, degrees.
    pub parallactic_angle: f64,
    /// Geocentric horizontal position of the moon.
    pub horizontal: HorizontalCoords,
    latitude: f64,
}

impl LunarOrientation {
    pub fn compute(time: &CalendarTime, location: &ObserverLocation, precision: Precision) -> Self {
        let jd = time.to_julian_day_utc();
        let n = nutation(jd, precision);
        let args = LunarArguments::at(jd);
        let apparent = Moon::new(precision).apparent_ecliptic(jd);
        let eps = true_obliquity_with(jd, &n);
        let equatorial = apparent.to_equatorial(eps);

        let librations = librations_for(&args, &apparent, n.longitude);
        let position_angle = position_angle_for(
            &args,
            n.longitude,
            eps,
            equatorial.right_ascension(),
            librations.latitude,
        );

        let lst = observer_sidereal_time(time, location.longitude(), precision);
        let parallactic_angle = parallactic_angle(
            equatorial.hour_angle(lst),
            equatorial.declination(),
            location.latitude(),
        );

        Self {
            librations,
            position_angle,
            parallactic_angle,
            horizontal: equatorial.to_horizontal(lst, location.latitude()),
            latitude: location.latitude(),
        }
    }

    /// Celestial north on the disk, as a unit vector in the horizontal frame
    /// perpendicular to the line of sight.
    pub fn sky_north(&self) -> Vector3 {
        let d = self.horizontal.to_unit_vector();
        let pole = HorizontalCoords::new(0.0, self.latitude).to_unit_vector();
        (pole - d * pole.dot(&d)).normalize()
    }

    /// Rotation taking the moon's body frame (x toward the mean sub-earth
    /// point, z toward the north pole) into the horizontal frame (x east,
    /// y north, z zenith).
    pub fn matrix(&self) -> RotationMatrix3 {
        let d = self.horizontal.to_unit_vector();
        let toward_earth = -d;
        let north = self.sky_north();
        let east = north.cross(&d);

        let (sin_p, cos_p) = (sin_deg(self.position_angle), cos_deg(self.position_angle));
        let (sin_b, cos_b) = (sin_deg(self.librations.latitude), cos_deg(self.librations.latitude));
        let (sin_l, cos_l) = (sin_deg(self.librations.longitude), cos_deg(self.librations.longitude));

        let axis_in_sky = north * cos_p + east * sin_p;
        let pole = axis_in_sky * cos_b + toward_earth * sin_b;

        // Sub-earth meridian direction in the equatorial plane of the moon
        let u = (toward_earth - pole * sin_b).normalize();
        let w = pole.cross(&u);

        let x_axis = u * cos_l - w * sin_l;
        let y_axis = u * sin_l + w * cos_l;

        RotationMatrix3::from_columns(x_axis, y_axis, pole)
    }

    pub fn matrix4(&self) -> Matrix4 {
        Matrix4::from(self.matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sun::Sun;
    use approx::assert_abs_diff_eq;

    // Meeus examples 48.a and 53.a: 1992-04-12 0h TD
    const APRIL_12_1992: f64 = 2448724.5;

    #[test]
    fn test_optical_librations_meeus_53a() {
        let lib = optical_librations(JulianDay::new(APRIL_12_1992), Precision::High);
        assert_abs_diff_eq!(lib.longitude, -1.206, epsilon = 1e-3);
        assert_abs_diff_eq!(lib.latitude, 4.194, epsilon = 1e-3);
    }

    #[test]
    fn test_position_angle_meeus_53a() {
        // 15.08° including physical librations
        let p = position_angle(JulianDay::new(APRIL_12_1992), Precision::High);
        assert_abs_diff_eq!(p, 15.08, epsilon = 0.05);
    }

    #[test]
    fn test_phase_meeus_48a() {
        let jd = JulianDay::new(APRIL_12_1992);
        let sun = Sun::new(Precision::High).apparent_position(jd);
        let moon = Moon::new(Precision::High).apparent_position(jd);

        let i = phase_angle(&sun, &moon);
        assert_abs_diff_eq!(i, 69.0756, epsilon = 1e-3);
        assert_abs_diff_eq!(illuminated_fraction(i), 0.6786, epsilon = 1e-4);
        assert_abs_diff_eq!(bright_limb_angle(&sun, &moon), 285.0, epsilon = 0.1);
    }

    #[test]
    fn test_illuminated_fraction_limits() {
        assert_abs_diff_eq!(illuminated_fraction(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(illuminated_fraction(180.0), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(illuminated_fraction(90.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_parallactic_angle() {
        assert_abs_diff_eq!(parallactic_angle(0.0, 10.0, 50.0), 0.0, epsilon = 1e-12);
        let east = parallactic_angle(-30.0, 10.0, 50.0);
        let west = parallactic_angle(30.0, 10.0, 50.0);
        assert!(west > 0.0);
        assert_abs_diff_eq!(east, -west, epsilon = 1e-12);
        assert_abs_diff_eq!(parallactic_angle(45.0, 0.0, 0.0), 90.0, epsilon = 1e-12);
    }

    fn berlin_orientation() -> LunarOrientation {
        let time = CalendarTime::new(2021, 3, 22.0, 21, 30, 0.0, 3600);
        let berlin = ObserverLocation::new(52.52, 13.405, 34.0);
        LunarOrientation::compute(&time, &berlin, Precision::High)
    }

    #[test]
    fn test_matrix_is_rotation() {
        let m = berlin_orientation().matrix();
        assert!(m.is_rotation_matrix(1e-12));
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_points_sub_earth_point_at_observer() {
        let o = berlin_orientation();
        let (l, b) = (o.librations.longitude, o.librations.latitude);
        let sub_earth = Vector3::new(cos_deg(b) * cos_deg(l), cos_deg(b) * sin_deg(l), sin_deg(b));
        let toward_earth = -o.horizontal.to_unit_vector();
        let mapped = o.matrix() * sub_earth;
        assert_abs_diff_eq!(mapped.x, toward_earth.x, epsilon = 1e-12);
        assert_abs_diff_eq!(mapped.y, toward_earth.y, epsilon = 1e-12);
        assert_abs_diff_eq!(mapped.z, toward_earth.z, epsilon = 1e-12);
    }

    #[test]
    fn test_sky_north_to_zenith_angle_is_parallactic_angle() {
        let o = berlin_orientation();
        let d = o.horizontal.to_unit_vector();
        let zenith = Vector3::z_axis();
        let sky_zenith = (zenith - d * zenith.dot(&d)).normalize();
        assert_abs_diff_eq!(
            o.sky_north().angle_to_deg(&sky_zenith),
            o.parallactic_angle.abs(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_matrix4_embeds_rotation() {
        let o = berlin_orientation();
        let m3 = o.matrix();
        let m4 = o.matrix4();
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(m4.get(r, c), m3.get(r, c));
            }
            assert_eq!(m4.get(r, 3), 0.0);
        }
        assert_eq!(m4.get(3, 3), 1.0);
    }
}
