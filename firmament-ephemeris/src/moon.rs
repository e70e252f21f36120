//! Lunar position from the periodic series of Meeus chapter 47.
//!
//! The high tier sums all 60 + 60 terms and the additive corrections for
//! Venus (A₁), Jupiter (A₂) and the flattening of the Earth (A₃). The low tier
//! keeps the first 12 longitude/distance and 10 latitude terms only, which
//! stays within about 0.15° in longitude and 500 km in distance.

use crate::earth::{apparent_angular_diameter, observer_sidereal_time, true_obliquity_with};
use crate::lunar_terms::{LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS};
use crate::nutation::nutation;
use firmament_core::angle::{asin_deg, cos_deg, revd, sin_deg};
use firmament_core::constants::{
    EARTH_EQUATORIAL_RADIUS_KM, MOON_MEAN_DISTANCE_KM, MOON_MEAN_RADIUS_KM,
};
use firmament_core::{ObserverLocation, Precision, Vector3};
use firmament_coords::{EclipticCoords, EquatorialCoords, HorizontalCoords};
use firmament_time::{CalendarTime, JulianDay};

const LOW_TIER_LONGITUDE_TERMS: usize = 12;
const LOW_TIER_LATITUDE_TERMS: usize = 10;

/// Fundamental arguments of the lunar theory in degrees, each in [0°, 360°).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// L′, mean longitude of the moon.
    pub mean_longitude: f64,
    /// D, mean elongation of the moon from the sun.
    pub mean_elongation: f64,
    /// M, mean anomaly of the sun.
    pub sun_mean_anomaly: f64,
    /// M′, mean anomaly of the moon.
    pub mean_anomaly: f64,
    /// F, argument of latitude.
    pub argument_of_latitude: f64,
    /// Ω, longitude of the ascending node.
    pub ascending_node: f64,
    /// E, eccentricity factor for terms in M.
    pub eccentricity_factor: f64,
}

impl LunarArguments {
    pub fn at(jd: JulianDay) -> Self {
        let t = jd.centuries_since_j2000();
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        Self {
            mean_longitude: revd(
                218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
                    - t4 / 65194000.0,
            ),
            mean_elongation: revd(
                297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
                    - t4 / 113065000.0,
            ),
            sun_mean_anomaly: revd(
                357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0,
            ),
            mean_anomaly: revd(
                134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
                    - t4 / 14712000.0,
            ),
            argument_of_latitude: revd(
                93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
                    + t4 / 863310000.0,
            ),
            ascending_node: revd(
                125.0445479 - 1934.1362891 * t + 0.0020754 * t2 + t3 / 467441.0
                    - t4 / 60616000.0,
            ),
            eccentricity_factor: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }

    fn term_argument(&self, d: i32, m: i32, mp: i32, f: i32) -> f64 {
        d as f64 * self.mean_elongation
            + m as f64 * self.sun_mean_anomaly
            + mp as f64 * self.mean_anomaly
            + f as f64 * self.argument_of_latitude
    }

    fn eccentricity_weight(&self, m: i32) -> f64 {
        match m.abs() {
            0 => 1.0,
            1 => self.eccentricity_factor,
            _ => self.eccentricity_factor * self.eccentricity_factor,
        }
    }
}

/// Sums Σl, Σb (10⁻⁶ degree) and Σr (10⁻³ km).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodicSums {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Moon {
    precision: Precision,
}

impl Moon {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn mean_longitude(&self, jd: JulianDay) -> f64 {
        LunarArguments::at(jd).mean_longitude
    }

    pub fn mean_elongation(&self, jd: JulianDay) -> f64 {
        LunarArguments::at(jd).mean_elongation
    }

    pub fn mean_anomaly(&self, jd: JulianDay) -> f64 {
        LunarArguments::at(jd).mean_anomaly
    }

    pub fn argument_of_latitude(&self, jd: JulianDay) -> f64 {
        LunarArguments::at(jd).argument_of_latitude
    }

    pub fn ascending_node(&self, jd: JulianDay) -> f64 {
        LunarArguments::at(jd).ascending_node
    }

    /// Periodic sums for the tier's share of the series.
    pub fn periodic_sums(&self, jd: JulianDay) -> PeriodicSums {
        let args = LunarArguments::at(jd);
        let (lon_terms, lat_terms) = match self.precision {
            Precision::High => (LONGITUDE_DISTANCE_TERMS.len(), LATITUDE_TERMS.len()),
            Precision::Low => (LOW_TIER_LONGITUDE_TERMS, LOW_TIER_LATITUDE_TERMS),
        };

        let mut sums = PeriodicSums::default();

        for &[d, m, mp, f, l, r] in LONGITUDE_DISTANCE_TERMS.iter().take(lon_terms) {
            let arg = args.term_argument(d, m, mp, f);
            let e = args.eccentricity_weight(m);
            sums.longitude += l as f64 * e * sin_deg(arg);
            sums.distance += r as f64 * e * cos_deg(arg);
        }

        for &[d, m, mp, f, b] in LATITUDE_TERMS.iter().take(lat_terms) {
            let arg = args.term_argument(d, m, mp, f);
            sums.latitude += b as f64 * args.eccentricity_weight(m) * sin_deg(arg);
        }

        if self.precision.is_high() {
            let t = jd.centuries_since_j2000();
            let a1 = 119.75 + 131.849 * t;
            let a2 = 53.09 + 479264.290 * t;
            let a3 = 313.45 + 481266.484 * t;
            let lp = args.mean_longitude;
            let mp = args.mean_anomaly;
            let f = args.argument_of_latitude;

            sums.longitude += 3958.0 * sin_deg(a1) + 1962.0 * sin_deg(lp - f) + 318.0 * sin_deg(a2);
            sums.latitude += -2235.0 * sin_deg(lp)
                + 382.0 * sin_deg(a3)
                + 175.0 * sin_deg(a1 - f)
                + 175.0 * sin_deg(a1 + f)
                + 127.0 * sin_deg(lp - mp)
                - 115.0 * sin_deg(lp + mp);
        }

        sums
    }

    /// Geometric ecliptic position referred to the mean equinox of date; radius in km.
    pub fn geocentric_position(&self, jd: JulianDay) -> EclipticCoords {
        let sums = self.periodic_sums(jd);
        let mean_longitude = self.mean_longitude(jd);
        EclipticCoords::with_radius(
            mean_longitude + sums.longitude / 1e6,
            sums.latitude / 1e6,
            MOON_MEAN_DISTANCE_KM + sums.distance / 1e3,
        )
    }

    /// Apparent ecliptic position: geometric longitude plus Δψ.
    pub fn apparent_ecliptic(&self, jd: JulianDay) -> EclipticCoords {
        let geo = self.geocentric_position(jd);
        let dpsi = nutation(jd, self.precision).longitude;
        EclipticCoords::with_radius(geo.longitude() + dpsi, geo.latitude(), geo.radius())
    }

    /// Apparent right ascension and declination, radius in km.
    pub fn apparent_position(&self, jd: JulianDay) -> EquatorialCoords {
        let n = nutation(jd, self.precision);
        let geo = self.geocentric_position(jd);
        EclipticCoords::with_radius(geo.longitude() + n.longitude, geo.latitude(), geo.radius())
            .to_equatorial(true_obliquity_with(jd, &n))
    }

    /// Geocentric horizontal position; no topocentric parallax is applied.
    pub fn horizontal_position(
        &self,
        time: &CalendarTime,
        location: &ObserverLocation,
    ) -> HorizontalCoords {
        let jd = time.to_julian_day_utc();
        let lst = observer_sidereal_time(time, location.longitude(), self.precision);
        self.apparent_position(jd)
            .to_horizontal(lst, location.latitude())
    }

    /// Unit vector toward the moon in the local frame (x east, y north, z zenith).
    pub fn direction(&self, time: &CalendarTime, location: &ObserverLocation) -> Vector3 {
        self.horizontal_position(time, location).to_unit_vector()
    }

    /// Earth-moon distance (centre to centre) in km.
    pub fn distance(&self, jd: JulianDay) -> f64 {
        self.geocentric_position(jd).radius()
    }

    /// Apparent angular radius in radians.
    pub fn angular_radius(&self, jd: JulianDay) -> f64 {
        apparent_angular_diameter(self.distance(jd), MOON_MEAN_RADIUS_KM) / 2.0
    }

    /// Equatorial horizontal parallax π in degrees.
    pub fn horizontal_parallax(&self, jd: JulianDay) -> f64 {
        asin_deg(EARTH_EQUATORIAL_RADIUS_KM / self.distance(jd))
    }
}
