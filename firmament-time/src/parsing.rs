//! ISO-8601-like timestamp parsing.
//!
//! Accepted forms:
//!
//! ```text
//! [-]YYYY-MM-DD
//! [-]YYYY-MM-DD[T ]HH:MM[:SS[.fff]][Z|±HH:MM|±HHMM|±HH]
//! ```
//!
//! A leading `-` marks an astronomical (BCE) year; the year needs at least
//! four digits. A missing zone means UTC.

use crate::calendar::CalendarTime;
use crate::{TimeError, TimeResult};

const MAX_TIMESTAMP_LENGTH: usize = 40;

/// Parses a timestamp into validated [`CalendarTime`] fields.
///
/// ```
/// use firmament_time::parse_iso8601;
///
/// let t = parse_iso8601("2011-12-04T12:00:00+01:00")?;
/// assert_eq!((t.year, t.month, t.day, t.hour), (2011, 12, 4.0, 12));
/// assert_eq!(t.utc_offset, 3600);
/// # Ok::<(), firmament_time::TimeError>(())
/// ```
pub fn parse_iso8601(s: &str) -> TimeResult<CalendarTime> {
    let s = s.trim();

    if s.len() > MAX_TIMESTAMP_LENGTH {
        return Err(TimeError::parse("Input too long"));
    }
    if s.is_empty() {
        return Err(TimeError::parse("Empty timestamp"));
    }

    let (negative_year, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (date_part, time_part) = match body.find(['T', 't', ' ']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let date_components: Vec<&str> = date_part.split('-').collect();
    if date_components.len() != 3 {
        return Err(TimeError::parse(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }
    if date_components[0].len() < 4 {
        return Err(TimeError::parse(format!(
            "Invalid year format: '{}'",
            date_components[0]
        )));
    }

    let year_abs = parse_digits(date_components[0], "year", 9)?;
    let year = if negative_year {
        -(year_abs as i32)
    } else {
        year_abs as i32
    };
    let month = parse_digits(date_components[1], "month", 2)?;
    let day = parse_digits(date_components[2], "day", 2)?;

    let (hour, minute, second, utc_offset) = match time_part {
        Some(t) => parse_time_and_zone(t)?,
        None => (0, 0, 0.0, 0),
    };

    CalendarTime::checked(year, month, day as f64, hour, minute, second, utc_offset).map_err(
        |err| match err {
            TimeError::Parse(_) => err,
            other => TimeError::parse(format!("'{}': {}", s, other)),
        },
    )
}

fn parse_time_and_zone(t: &str) -> TimeResult<(u32, u32, f64, i32)> {
    let (clock, utc_offset) = if let Some(clock) = t.strip_suffix(['Z', 'z']) {
        (clock, 0)
    } else if let Some(pos) = t.rfind(['+', '-']) {
        (&t[..pos], parse_zone(&t[pos..])?)
    } else {
        (t, 0)
    };

    let components: Vec<&str> = clock.split(':').collect();
    if !(2..=3).contains(&components.len()) {
        return Err(TimeError::parse(format!(
            "Invalid time format: '{}'. Expected HH:MM[:SS]",
            clock
        )));
    }

    let hour = parse_digits(components[0], "hour", 2)?;
    let minute = parse_digits(components[1], "minute", 2)?;
    let second = match components.get(2) {
        Some(sec) => parse_seconds(sec)?,
        None => 0.0,
    };

    Ok((hour, minute, second, utc_offset))
}

fn parse_zone(zone: &str) -> TimeResult<i32> {
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits = &zone[1..];
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() == 4 => digits.split_at(2),
        None if digits.len() == 2 => (digits, "00"),
        None => {
            return Err(TimeError::parse(format!("Invalid UTC offset: '{}'", zone)));
        }
    };
    let hours = parse_digits(hours, "offset hours", 2)? as i32;
    let minutes = parse_digits(minutes, "offset minutes", 2)? as i32;
    if minutes >= 60 {
        return Err(TimeError::parse(format!("Invalid UTC offset: '{}'", zone)));
    }
    Ok(sign * (hours * 3600 + minutes * 60))
}

fn parse_digits(field: &str, name: &str, max_len: usize) -> TimeResult<u32> {
    if field.is_empty() || field.len() > max_len || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::parse(format!("Invalid {}: '{}'", name, field)));
    }
    field
        .parse()
        .map_err(|_| TimeError::parse(format!("Invalid {}: '{}'", name, field)))
}

fn parse_seconds(field: &str) -> TimeResult<f64> {
    let (whole, fraction) = field.split_once('.').unwrap_or((field, ""));
    parse_digits(whole, "second", 2)?;
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::parse(format!("Invalid second: '{}'", field)));
    }
    field
        .parse::<f64>()
        .map_err(|_| TimeError::parse(format!("Invalid second: '{}'", field)))
}
