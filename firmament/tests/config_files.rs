#![cfg(feature = "serde")]

use firmament::{AstronomyConfig, FirmamentError, ObserverLocation, Precision};

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sky.ron");

    let config = AstronomyConfig {
        precision: Precision::Low,
        observer: ObserverLocation::new(-33.8688, 151.2093, 58.0),
        utc_offset: 36_000,
        time: None,
    };
    config.save(&path).unwrap();

    assert_eq!(AstronomyConfig::load(&path).unwrap(), config);
}

#[test]
fn load_or_create_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sky.ron");

    let created = AstronomyConfig::load_or_create(&path).unwrap();
    assert_eq!(created, AstronomyConfig::default());
    assert!(path.exists());

    let loaded = AstronomyConfig::load_or_create(&path).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AstronomyConfig::load(&dir.path().join("absent.ron")).unwrap_err();
    assert!(matches!(err, FirmamentError::Io(_)));
}

#[test]
fn comments_and_fixed_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sky.ron");
    std::fs::write(
        &path,
        "// Berlin, fixed instant\n(\n  observer: (latitude: 52.5167, longitude: 13.4),\n  time: Some(\"2011-12-04T12:00:00+01:00\"),\n)",
    )
    .unwrap();

    let config = AstronomyConfig::load(&path).unwrap();
    let mut cache = config.cached_astronomy().unwrap();
    let sun = cache.state().sun.horizontal;
    assert!((sun.azimuth() - 180.0).abs() < 1.0);
    assert!((sun.altitude() - 15.0).abs() < 1.0);
}
