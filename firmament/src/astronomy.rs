//! Pure evaluation of the sky for one instant and one observer.

use firmament_coords::{equatorial_to_horizontal_matrix, EquatorialCoords, HorizontalCoords};
use firmament_core::{Matrix4, ObserverLocation, Precision, RotationMatrix3, Vector3};
use firmament_ephemeris::{
    illuminated_fraction, observer_sidereal_time, phase_angle, solar_overlap, LunarEclipse,
    LunarOrientation, Moon, SolarOverlap, Star, Sun,
};
use firmament_time::{CalendarTime, JulianDay};

/// Position of the sun or the moon as seen by the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Apparent geocentric position; `radius` is the distance in km.
    pub equatorial: EquatorialCoords,
    pub horizontal: HorizontalCoords,
    /// Unit vector in the horizontal frame (x east, y north, z zenith).
    pub direction: Vector3,
    /// Distance in km.
    pub distance: f64,
    /// Apparent angular radius in radians.
    pub angular_radius: f64,
}

impl BodyState {
    fn new(equatorial: EquatorialCoords, horizontal: HorizontalCoords, angular_radius: f64) -> Self {
        Self {
            equatorial,
            horizontal,
            direction: horizontal.to_unit_vector(),
            distance: equatorial.radius(),
            angular_radius,
        }
    }
}

/// Everything a sky renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyState {
    pub time: CalendarTime,
    pub julian_day: JulianDay,
    /// Local sidereal time in hours.
    pub local_sidereal_time: f64,
    pub sun: BodyState,
    pub moon: BodyState,
    /// Rotates the moon's body frame into the horizontal frame.
    pub moon_orientation: RotationMatrix3,
    /// Phase angle of the moon, degrees.
    pub moon_phase_angle: f64,
    pub moon_illuminated_fraction: f64,
    /// Rotates equatorial star vectors into the horizontal frame.
    pub star_matrix: RotationMatrix3,
    pub lunar_eclipse: LunarEclipse,
    pub solar_overlap: SolarOverlap,
}

impl SkyState {
    pub fn moon_orientation4(&self) -> Matrix4 {
        Matrix4::from(self.moon_orientation)
    }

    pub fn star_matrix4(&self) -> Matrix4 {
        Matrix4::from(self.star_matrix)
    }

    pub fn is_day(&self) -> bool {
        self.sun.horizontal.is_above_horizon()
    }
}

/// Stateless sky evaluator; the precision tier is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Astronomy {
    precision: Precision,
    sun: Sun,
    moon: Moon,
}

impl Astronomy {
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            sun: Sun::new(precision),
            moon: Moon::new(precision),
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn evaluate(&self, time: &CalendarTime, location: &ObserverLocation) -> SkyState {
        let jd = time.to_julian_day_utc();
        let lst = observer_sidereal_time(time, location.longitude(), self.precision);

        let sun_eq = self.sun.apparent_position(jd);
        let sun = BodyState::new(
            sun_eq,
            sun_eq.to_horizontal(lst, location.latitude()),
            self.sun.angular_radius(jd),
        );

        let moon_eq = self.moon.apparent_position(jd);
        let moon = BodyState::new(
            moon_eq,
            moon_eq.to_horizontal(lst, location.latitude()),
            self.moon.angular_radius(jd),
        );

        let orientation = LunarOrientation::compute(time, location, self.precision);
        let moon_phase_angle = phase_angle(&sun_eq, &moon_eq);

        SkyState {
            time: *time,
            julian_day: jd,
            local_sidereal_time: lst,
            sun,
            moon,
            moon_orientation: orientation.matrix(),
            moon_phase_angle,
            moon_illuminated_fraction: illuminated_fraction(moon_phase_angle),
            star_matrix: equatorial_to_horizontal_matrix(lst, location.latitude()),
            lunar_eclipse: LunarEclipse::from_positions(&sun_eq, &moon_eq),
            solar_overlap: solar_overlap(&sun_eq, &moon_eq),
        }
    }

    pub fn star_position(
        &self,
        star: &Star,
        time: &CalendarTime,
        location: &ObserverLocation,
    ) -> HorizontalCoords {
        star.horizontal_position(time, location, self.precision)
    }
}
