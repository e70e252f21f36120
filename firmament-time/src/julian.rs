//! Julian Day: the continuous day count every series is evaluated on.
//!
//! A Julian Day counts days since 4713 BCE January 1, 12:00, in the proleptic
//! Julian calendar. The conversion from calendar fields follows Meeus,
//! *Astronomical Algorithms*, chapter 7:
//!
//! - January and February are treated as months 13 and 14 of the previous year
//! - dates from 1582-10-15 on get the Gregorian correction `B = 2 − A + ⌊A/4⌋`
//! - the ten dates 1582-10-05 … 1582-10-14 never existed and map to `0.0`
//! - instants before the epoch also map to `0.0`
//!
//! `0.0` is a sentinel, not an error: the sky models evaluate it like any
//! other day. Use [`CalendarTime::checked`] to reject such dates up front.

use crate::calendar::CalendarTime;
use firmament_core::constants::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64,
    UNIX_EPOCH_JD,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDay(f64);

impl JulianDay {
    pub const J2000: JulianDay = JulianDay(J2000_JD);

    pub const UNIX_EPOCH: JulianDay = JulianDay(UNIX_EPOCH_JD);

    #[inline]
    pub fn new(jd: f64) -> Self {
        Self(jd)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Converts the calendar fields as a local clock reading; the UTC offset is ignored.
    ///
    /// See [`CalendarTime::to_julian_day_utc`] for the UTC instant.
    ///
    /// ```
    /// use firmament_time::{CalendarTime, JulianDay};
    ///
    /// let jd = JulianDay::from_calendar(&CalendarTime::date(2000, 1, 1.5));
    /// assert_eq!(jd.value(), 2451545.0);
    ///
    /// let gap = JulianDay::from_calendar(&CalendarTime::date(1582, 10, 10.0));
    /// assert_eq!(gap.value(), 0.0);
    /// ```
    pub fn from_calendar(time: &CalendarTime) -> Self {
        let calendar_day = libm::floor(time.day);
        if time.year == 1582 && time.month == 10 && (5.0..15.0).contains(&calendar_day) {
            log::debug!(
                "1582-10-{:02} falls in the Julian/Gregorian calendar gap, returning JD 0",
                calendar_day as i32
            );
            return Self(0.0);
        }

        let gregorian = (time.year, time.month, calendar_day) >= (1582, 10, 15.0);

        let (mut y, mut m) = (time.year, time.month.clamp(1, 12) as i32);
        if m <= 2 {
            y -= 1;
            m += 12;
        }

        let b = if gregorian {
            let a = libm::floor(y as f64 / 100.0);
            2.0 - a + libm::floor(a / 4.0)
        } else {
            0.0
        };

        let day = time.day + time.day_fraction();
        let jd = libm::floor(365.25 * (y as f64 + 4716.0))
            + libm::floor(30.6001 * (m as f64 + 1.0))
            + day
            + b
            - 1524.5;

        if jd < 0.0 {
            log::debug!("{} precedes the Julian Day epoch, returning JD 0", time);
            return Self(0.0);
        }

        Self(jd)
    }

    pub fn from_modified(mjd: f64) -> Self {
        Self(mjd + MJD_ZERO_POINT)
    }

    /// Modified Julian Day, `jd − 2400000.5`.
    pub fn to_modified(&self) -> f64 {
        self.0 - MJD_ZERO_POINT
    }

    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY_F64)
    }

    pub fn to_unix_seconds(&self) -> f64 {
        (self.0 - UNIX_EPOCH_JD) * SECONDS_PER_DAY_F64
    }

    /// Julian centuries since J2000.0, the `T` of every polynomial in the models.
    #[inline]
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.0 - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    #[inline]
    pub fn years_since_j2000(&self) -> f64 {
        (self.0 - J2000_JD) / DAYS_PER_JULIAN_YEAR
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY_F64)
    }

    /// False for the `0.0` sentinel (calendar gap or pre-epoch input) and non-finite values.
    pub fn is_valid(&self) -> bool {
        self.0 > 0.0 && self.0.is_finite()
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.0)
    }
}

impl From<f64> for JulianDay {
    fn from(jd: f64) -> Self {
        Self(jd)
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.0
    }
}

impl From<&CalendarTime> for JulianDay {
    fn from(time: &CalendarTime) -> Self {
        Self::from_calendar(time)
    }
}

/// Difference in days.
impl std::ops::Sub for JulianDay {
    type Output = f64;

    fn sub(self, rhs: Self) -> f64 {
        self.0 - rhs.0
    }
}
