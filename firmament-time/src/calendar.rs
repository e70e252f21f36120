//! Calendar date and time of day with a UTC offset.
//!
//! [`CalendarTime`] is a plain value: fields are public, the struct is `Copy`,
//! and every operation returns a new value. Hour, minute and second may be
//! denormalized (`hour = 24`, `second = 75.0`) and the day may carry a
//! fraction; both are folded in when converting to a Julian Day. Years are
//! astronomical: year 0 is 1 BCE, year −1 is 2 BCE.

use crate::julian::JulianDay;
use crate::{TimeError, TimeResult};
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};
use firmament_core::constants::{HOURS_PER_DAY, SECONDS_PER_DAY_F64, SECONDS_PER_HOUR_F64};
use std::fmt;
use std::str::FromStr;

/// Largest UTC offset accepted by [`CalendarTime::checked`] (±18 h, as in ISO 8601).
pub const MAX_UTC_OFFSET_SECONDS: i32 = 18 * 3600;

const SUBSECOND_STEPS: f64 = 1e4;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarTime {
    /// Astronomical year (0 = 1 BCE).
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of month, possibly fractional.
    pub day: f64,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Seconds east of Greenwich.
    #[cfg_attr(feature = "serde", serde(default))]
    pub utc_offset: i32,
}

impl Default for CalendarTime {
    fn default() -> Self {
        Self::date(2000, 1, 1.5)
    }
}

impl CalendarTime {
    /// Creates a calendar time, clamping the month into 1–12.
    ///
    /// ```
    /// use firmament_time::CalendarTime;
    ///
    /// let t = CalendarTime::new(2011, 12, 4.0, 12, 0, 0.0, 3600);
    /// assert_eq!(t.hour, 12);
    /// assert_eq!(CalendarTime::new(2011, 14, 4.0, 0, 0, 0.0, 0).month, 12);
    /// ```
    pub fn new(
        year: i32,
        month: u32,
        day: f64,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset: i32,
    ) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
            day,
            hour,
            minute,
            second,
            utc_offset,
        }
    }

    /// Midnight (or the fractional part of `day`) in UTC.
    pub fn date(year: i32, month: u32, day: f64) -> Self {
        Self::new(year, month, day, 0, 0, 0.0, 0)
    }

    /// Creates a calendar time after validating every field.
    ///
    /// Rejects months outside 1–12, days outside the month, hours ≥ 24,
    /// minutes ≥ 60, seconds outside [0, 61), offsets beyond ±18 h,
    /// dates in the 1582 calendar gap, and non-finite values.
    pub fn checked(
        year: i32,
        month: u32,
        day: f64,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset: i32,
    ) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::invalid_date(format!(
                "month {} outside 1-12",
                month
            )));
        }
        if !day.is_finite() || !second.is_finite() {
            return Err(TimeError::invalid_date("day and second must be finite"));
        }
        let last_day = days_in_month(year, month);
        if day < 1.0 || day >= (last_day + 1) as f64 {
            return Err(TimeError::invalid_date(format!(
                "day {} outside 1-{} for {:04}-{:02}",
                day, last_day, year, month
            )));
        }
        if hour >= 24 || minute >= 60 || !(0.0..61.0).contains(&second) {
            return Err(TimeError::invalid_date(format!(
                "time {:02}:{:02}:{} out of range",
                hour, minute, second
            )));
        }
        if utc_offset.abs() > MAX_UTC_OFFSET_SECONDS {
            return Err(TimeError::invalid_date(format!(
                "UTC offset {}s exceeds ±18h",
                utc_offset
            )));
        }
        if year == 1582 && month == 10 && (5.0..15.0).contains(&libm::floor(day)) {
            return Err(firmament_core::AstroError::invalid_date(
                year,
                month as i32,
                day as i32,
                "falls in the Julian/Gregorian calendar gap",
            )
            .into());
        }
        Ok(Self::new(year, month, day, hour, minute, second, utc_offset))
    }

    /// Converts a Unix timestamp (seconds since 1970-01-01T00:00Z) to local
    /// calendar fields at `utc_offset` seconds east of Greenwich.
    ///
    /// ```
    /// use firmament_time::CalendarTime;
    ///
    /// let t = CalendarTime::from_unix_timestamp(0.0, 3600);
    /// assert_eq!((t.year, t.month, t.day, t.hour), (1970, 1, 1.0, 1));
    /// ```
    pub fn from_unix_timestamp(seconds: f64, utc_offset: i32) -> Self {
        Self::from_julian_day_with_offset(JulianDay::from_unix_seconds(seconds), utc_offset)
    }

    /// Calendar fields for a Julian Day, in UTC (Meeus ch. 7, inverse).
    pub fn from_julian_day(jd: JulianDay) -> Self {
        Self::from_julian_day_with_offset(jd, 0)
    }

    /// Calendar fields for a UTC Julian Day, expressed at `utc_offset`.
    pub fn from_julian_day_with_offset(jd: JulianDay, utc_offset: i32) -> Self {
        let local = jd.value() + utc_offset as f64 / SECONDS_PER_DAY_F64 + 0.5;
        let mut z = libm::floor(local);

        // Quantize to 0.1 ms (a JD near 2.4e6 resolves ~40 µs) so an instant
        // on a whole second does not come back as 59.99998 s of the minute before.
        let mut seconds_of_day =
            libm::round((local - z) * SECONDS_PER_DAY_F64 * SUBSECOND_STEPS) / SUBSECOND_STEPS;
        if seconds_of_day >= SECONDS_PER_DAY_F64 {
            z += 1.0;
            seconds_of_day -= SECONDS_PER_DAY_F64;
        }

        let a = if z < firmament_core::constants::GREGORIAN_START_JDN as f64 {
            z
        } else {
            let alpha = libm::floor((z - 1867216.25) / 36524.25);
            z + 1.0 + alpha - libm::floor(alpha / 4.0)
        };
        let b = a + 1524.0;
        let c = libm::floor((b - 122.1) / 365.25);
        let d = libm::floor(365.25 * c);
        let e = libm::floor((b - d) / 30.6001);

        let day = b - d - libm::floor(30.6001 * e);
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        // Spread the day fraction over hour, minute, second.
        let hour = libm::floor(seconds_of_day / SECONDS_PER_HOUR_F64);
        let remainder = seconds_of_day - hour * SECONDS_PER_HOUR_F64;
        let minute = libm::floor(remainder / 60.0);
        let second = remainder - minute * 60.0;

        Self {
            year: year as i32,
            month: month as u32,
            day,
            hour: hour as u32,
            minute: minute as u32,
            second,
            utc_offset,
        }
    }

    /// The current instant in UTC.
    pub fn now_utc() -> Self {
        Self::from(chrono::Utc::now())
    }

    /// Fraction of a day contributed by hour, minute and second.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 + (self.minute as f64 + self.second / 60.0) / 60.0) / HOURS_PER_DAY
    }

    /// Julian Day of the fields read as a local clock (offset ignored).
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay::from_calendar(self)
    }

    /// Julian Day of the UTC instant: the local reading minus the offset.
    ///
    /// The calendar-gap sentinel stays `0.0`.
    pub fn to_julian_day_utc(&self) -> JulianDay {
        let local = self.to_julian_day();
        if local.value() == 0.0 {
            return local;
        }
        local.add_seconds(-(self.utc_offset as f64))
    }

    /// Modified Julian Day of the local clock reading.
    pub fn to_modified_julian_day(&self) -> f64 {
        self.to_julian_day().to_modified()
    }

    pub fn to_modified_julian_day_utc(&self) -> f64 {
        self.to_julian_day_utc().to_modified()
    }

    pub fn to_unix_timestamp(&self) -> f64 {
        self.to_julian_day_utc().to_unix_seconds()
    }

    /// The same instant with an integral day and hour/minute/second in range.
    ///
    /// Dates that map to the Julian Day sentinel are returned unchanged.
    ///
    /// ```
    /// use firmament_time::CalendarTime;
    ///
    /// let t = CalendarTime::new(1999, 12, 31.0, 24, 0, 30.0, 0).normalized();
    /// assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2000, 1, 1.0, 0, 0));
    /// assert!((t.second - 30.0).abs() < 1e-4);
    /// ```
    pub fn normalized(&self) -> Self {
        let jd = self.to_julian_day_utc();
        if !jd.is_valid() {
            return *self;
        }
        Self::from_julian_day_with_offset(jd, self.utc_offset)
    }

    /// The same instant expressed at another UTC offset.
    pub fn with_utc_offset(&self, utc_offset: i32) -> Self {
        let jd = self.to_julian_day_utc();
        if !jd.is_valid() {
            return Self {
                utc_offset,
                ..*self
            };
        }
        Self::from_julian_day_with_offset(jd, utc_offset)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

/// Leap-year rule of the calendar in force: Julian before 1583, Gregorian after.
pub fn is_leap_year(year: i32) -> bool {
    if year < 1583 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = if self.day.fract() != 0.0 {
            self.normalized()
        } else {
            *self
        };
        // Milliseconds that round up to a whole minute carry into the minute field.
        if t.second < 60.0 && libm::round(t.second * 1000.0) >= 60_000.0 {
            t = Self { second: 60.0, ..t }.normalized();
        }

        if t.year < 0 {
            write!(f, "-{:04}", t.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", t.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            t.month, t.day as u32, t.hour, t.minute, t.second
        )?;

        if t.utc_offset == 0 {
            write!(f, "Z")
        } else {
            let sign = if t.utc_offset < 0 { '-' } else { '+' };
            let minutes = t.utc_offset.unsigned_abs() / 60;
            write!(f, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
        }
    }
}

impl FromStr for CalendarTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parsing::parse_iso8601(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarTime {
    fn from(dt: DateTime<Tz>) -> Self {
        let utc_offset = dt.offset().fix().local_minus_utc();
        let local = dt.naive_local();
        let second = local.second() as f64 + local.nanosecond() as f64 * 1e-9;
        Self {
            year: local.year(),
            month: local.month(),
            day: local.day() as f64,
            hour: local.hour(),
            minute: local.minute(),
            second,
            utc_offset,
        }
    }
}
