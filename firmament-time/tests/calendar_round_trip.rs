use approx::assert_abs_diff_eq;
use firmament_time::{local_sidereal_time, sidereal_time, CalendarTime, JulianDay};

#[test]
fn julian_day_round_trip_is_sub_second() {
    let mut jd = 1_000_000.25;
    while jd < 2_600_000.0 {
        let back = CalendarTime::from_julian_day(JulianDay::new(jd)).to_julian_day();
        // 1e-8 day is under a millisecond
        assert_abs_diff_eq!(back.value(), jd, epsilon = 1e-8);
        jd += 9_973.123_456;
    }
}

#[test]
fn round_trip_with_offset_keeps_the_instant() {
    for offset in [-36_000, -3_600, 0, 19_800, 46_800] {
        let jd = JulianDay::new(2_459_945.731_25);
        let local = CalendarTime::from_julian_day_with_offset(jd, offset);
        assert_eq!(local.utc_offset, offset);
        assert_abs_diff_eq!(local.to_julian_day_utc().value(), jd.value(), epsilon = 1e-8);
    }
}

#[test]
fn reference_julian_days() {
    assert_abs_diff_eq!(
        CalendarTime::date(1957, 10, 4.81).to_julian_day().value(),
        2_436_116.31,
        epsilon = 1e-9
    );
    assert_eq!(CalendarTime::date(2000, 1, 1.5).to_julian_day(), JulianDay::J2000);
    for day in 5..=14 {
        assert_eq!(CalendarTime::date(1582, 10, day as f64).to_julian_day().value(), 0.0);
    }
    assert_eq!(CalendarTime::date(-5000, 1, 1.0).to_julian_day().value(), 0.0);
}

#[test]
fn sidereal_time_follows_longitude() {
    let time = CalendarTime::new(1987, 4, 10.0, 0, 0, 0.0, 0);
    let greenwich = sidereal_time(&time);
    assert_abs_diff_eq!(greenwich, 13.0 + 10.0 / 60.0 + 46.3668 / 3600.0, epsilon = 1e-8);

    let east = local_sidereal_time(&time, 90.0);
    assert_abs_diff_eq!(east, greenwich + 6.0, epsilon = 1e-9);
    let west = local_sidereal_time(&time, -150.0);
    assert_abs_diff_eq!(west, greenwich - 10.0, epsilon = 1e-9);
}

#[test]
fn parsed_chrono_and_unix_agree() {
    let parsed: CalendarTime = "2011-12-04T12:00:00+01:00".parse().unwrap();
    let from_unix = CalendarTime::from_unix_timestamp(1_322_996_400.0, 3_600);
    let dt = chrono::DateTime::parse_from_rfc3339("2011-12-04T12:00:00+01:00").unwrap();
    let from_chrono = CalendarTime::from(dt);

    assert_abs_diff_eq!(
        parsed.to_julian_day_utc().value(),
        from_chrono.to_julian_day_utc().value(),
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        parsed.to_julian_day_utc().value(),
        from_unix.to_julian_day_utc().value(),
        epsilon = 1e-9
    );
    assert_eq!(from_unix.hour, 12);
}
