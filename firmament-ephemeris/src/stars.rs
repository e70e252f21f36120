//! Catalogue stars: proper motion and annual precession from J2000.

use crate::earth::observer_sidereal_time;
use firmament_core::angle::{clamp_dec, cos_deg, sin_deg, tan_deg};
use firmament_core::constants::J2000_JD;
use firmament_core::{ObserverLocation, Precision};
use firmament_coords::{EquatorialCoords, HorizontalCoords};
use firmament_time::{CalendarTime, JulianDay};

/// Midpoint passes when integrating the annual precession rates.
const PRECESSION_PASSES: usize = 2;

/// A star referred to the J2000 equinox.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Star {
    /// Right ascension at J2000, degrees.
    pub ra_j2000: f64,
    /// Declination at J2000, degrees.
    pub dec_j2000: f64,
    /// Proper motion in right ascension, seconds of time per year.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pm_ra: f64,
    /// Proper motion in declination, arcseconds per year.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pm_dec: f64,
    /// Visual magnitude.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vmag: f64,
}

impl Star {
    pub fn new(ra_j2000: f64, dec_j2000: f64, pm_ra: f64, pm_dec: f64, vmag: f64) -> Self {
        Self {
            ra_j2000,
            dec_j2000,
            pm_ra,
            pm_dec,
            vmag,
        }
    }

    /// Mean position for the equinox of `jd`.
    ///
    /// Proper motion is applied over the elapsed Julian years, then the
    /// annual precession of Meeus 21.1 (m, n in seconds of time, n″ in
    /// arcseconds) is integrated with rates taken at the midpoint of the
    /// path. Good to a few milliarcseconds within a century of J2000; very
    /// close to the celestial poles the `tan δ` term breaks down.
    pub fn apparent_position(&self, jd: JulianDay) -> EquatorialCoords {
        let years = (jd.value() - J2000_JD) / 365.25;
        // Rates at mid-epoch
        let t = years / 200.0;
        let m = 3.07496 + 0.00186 * t;
        let n = 1.33621 - 0.00057 * t;
        let n_arcsec = 20.0431 - 0.0085 * t;

        let ra_pm = self.ra_j2000 + self.pm_ra * years * 15.0 / 3600.0;
        let dec_pm = self.dec_j2000 + self.pm_dec * years / 3600.0;

        let (mut ra, mut dec) = (ra_pm, dec_pm);
        for _ in 0..PRECESSION_PASSES {
            let ra_mid = (ra_pm + ra) / 2.0;
            let dec_mid = (dec_pm + dec) / 2.0;
            let delta_ra = m + n * sin_deg(ra_mid) * tan_deg(dec_mid);
            let delta_dec = n_arcsec * cos_deg(ra_mid);
            ra = ra_pm + delta_ra * years * 15.0 / 3600.0;
            dec = dec_pm + delta_dec * years / 3600.0;
        }

        EquatorialCoords::new(ra, clamp_dec(dec))
    }

    pub fn horizontal_position(
        &self,
        time: &CalendarTime,
        location: &ObserverLocation,
        precision: Precision,
    ) -> HorizontalCoords {
        let lst = observer_sidereal_time(time, location.longitude(), precision);
        self.apparent_position(time.to_julian_day_utc())
            .to_horizontal(lst, location.latitude())
    }
}
