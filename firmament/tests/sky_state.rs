use approx::assert_abs_diff_eq;
use firmament::{
    Astronomy, AzimuthConvention, CachedAstronomy, CalendarTime, LunarEclipseKind,
    ObserverLocation, Precision,
};

#[test]
fn tiers_agree_to_within_a_fraction_of_a_degree() {
    let time = CalendarTime::new(2023, 8, 1.0, 22, 15, 0.0, 7200);
    let here = ObserverLocation::new(47.37, 8.54, 408.0);

    let high = Astronomy::new(Precision::High).evaluate(&time, &here);
    let low = Astronomy::new(Precision::Low).evaluate(&time, &here);

    assert_abs_diff_eq!(
        high.sun.horizontal.altitude(),
        low.sun.horizontal.altitude(),
        epsilon = 0.02
    );
    assert_abs_diff_eq!(
        high.moon.horizontal.altitude(),
        low.moon.horizontal.altitude(),
        epsilon = 0.2
    );
    assert_abs_diff_eq!(high.moon.distance, low.moon.distance, epsilon = 500.0);
}

#[test]
fn south_based_azimuth_for_renderers() {
    let time = CalendarTime::new(2011, 12, 4.0, 12, 0, 0.0, 3600);
    let berlin = ObserverLocation::new(52.5167, 13.4, 34.0);
    let sky = Astronomy::default().evaluate(&time, &berlin);

    let from_south = sky.sun.horizontal.azimuth_in(AzimuthConvention::FromSouth);
    let from_south = if from_south > 180.0 {
        from_south - 360.0
    } else {
        from_south
    };
    assert_abs_diff_eq!(from_south, 0.0, epsilon = 1.0);
}

#[test]
fn total_lunar_eclipse_is_reported() {
    let time = CalendarTime::new(2022, 11, 8.0, 10, 59, 0.0, 0);
    let sky = Astronomy::default().evaluate(&time, &ObserverLocation::new(21.3, -157.8, 0.0));
    assert_eq!(sky.lunar_eclipse.kind, LunarEclipseKind::Total);
    assert!(sky.moon_illuminated_fraction > 0.99);
}

#[test]
fn cache_follows_a_moving_clock() {
    let here = ObserverLocation::new(35.68, 139.69, 40.0);
    let start = CalendarTime::new(2024, 3, 20.0, 6, 0, 0.0, 32_400);
    let mut cache = CachedAstronomy::new(Astronomy::new(Precision::Low), start, here);

    let mut last_altitude = cache.state().sun.horizontal.altitude();
    for hour in 7..12 {
        cache.set_time(CalendarTime::new(2024, 3, 20.0, hour, 0, 0.0, 32_400));
        let altitude = cache.state().sun.horizontal.altitude();
        assert!(altitude > last_altitude, "sun should climb through the morning");
        last_altitude = altitude;
    }
    assert_eq!(cache.evaluations(), 6);
}

#[test]
fn star_matrix4_matches_rotation() {
    let sky = Astronomy::default().evaluate(
        &CalendarTime::date(2000, 1, 1.5),
        &ObserverLocation::new(-30.0, -70.0, 2200.0),
    );
    let m3 = sky.star_matrix;
    let m4 = sky.star_matrix4();
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(m4.get(r, c), m3.get(r, c));
        }
    }
}
