//! RON-backed settings for the sky engine.

use std::path::Path;
use std::str::FromStr;

use firmament_core::{ObserverLocation, Precision};
use firmament_time::calendar::MAX_UTC_OFFSET_SECONDS;
use firmament_time::CalendarTime;
use serde::{Deserialize, Serialize};

use crate::astronomy::Astronomy;
use crate::cache::CachedAstronomy;
use crate::error::{FirmamentError, FirmamentResult};

/// Engine settings. Missing fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AstronomyConfig {
    pub precision: Precision,
    /// Observer; out-of-range coordinates are clamped on load.
    pub observer: ObserverLocation,
    /// Offset east of UTC in seconds for instants the engine creates itself.
    pub utc_offset: i32,
    /// Fixed instant in ISO-8601 form; the current time when absent.
    pub time: Option<String>,
}

impl AstronomyConfig {
    pub fn from_ron_str(source: &str) -> FirmamentResult<Self> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> FirmamentResult<String> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn load(path: &Path) -> FirmamentResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&contents)?;
        log::info!("Loaded astronomy config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, writing the default configuration there first if it does not exist.
    pub fn load_or_create(path: &Path) -> FirmamentResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.save(path)?;
            log::info!("Created default astronomy config at {}", path.display());
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> FirmamentResult<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> FirmamentResult<()> {
        if self.utc_offset.abs() > MAX_UTC_OFFSET_SECONDS {
            return Err(FirmamentError::config(
                "utc_offset",
                &format!(
                    "{} s is outside ±{} s",
                    self.utc_offset, MAX_UTC_OFFSET_SECONDS
                ),
            ));
        }
        if let Some(text) = &self.time {
            CalendarTime::from_str(text)?;
        }
        Ok(())
    }

    /// The configured instant, or now expressed at `utc_offset`.
    pub fn start_time(&self) -> FirmamentResult<CalendarTime> {
        match &self.time {
            Some(text) => Ok(CalendarTime::from_str(text)?),
            None => Ok(CalendarTime::now_utc().with_utc_offset(self.utc_offset)),
        }
    }

    pub fn astronomy(&self) -> Astronomy {
        Astronomy::new(self.precision)
    }

    pub fn cached_astronomy(&self) -> FirmamentResult<CachedAstronomy> {
        Ok(CachedAstronomy::new(
            self.astronomy(),
            self.start_time()?,
            self.observer,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AstronomyConfig::default();
        assert_eq!(config.precision, Precision::High);
        assert_eq!(config.utc_offset, 0);
        assert!(config.time.is_none());
    }

    #[test]
    fn test_round_trip() {
        let config = AstronomyConfig {
            precision: Precision::Low,
            observer: ObserverLocation::new(52.52, 13.405, 34.0),
            utc_offset: 3600,
            time: Some("2011-12-04T12:00:00+01:00".to_string()),
        };
        let text = config.to_ron_string().unwrap();
        assert_eq!(AstronomyConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = AstronomyConfig::from_ron_str("(precision: Low)").unwrap();
        assert_eq!(config.precision, Precision::Low);
        assert_eq!(config.observer, ObserverLocation::default());
    }

    #[test]
    fn test_observer_is_clamped() {
        let config =
            AstronomyConfig::from_ron_str("(observer: (latitude: 120.0, longitude: -190.0))")
                .unwrap();
        assert_eq!(config.observer.latitude(), 90.0);
        assert_eq!(config.observer.longitude(), -180.0);
    }

    #[test]
    fn test_invalid_ron() {
        let err = AstronomyConfig::from_ron_str("{{not ron}}").unwrap_err();
        assert!(matches!(err, FirmamentError::Parse(_)));
    }

    #[test]
    fn test_offset_out_of_range() {
        let err = AstronomyConfig::from_ron_str("(utc_offset: 90000)").unwrap_err();
        assert!(matches!(err, FirmamentError::Config(_)));
    }

    #[test]
    fn test_bad_time_is_time_error() {
        let err = AstronomyConfig::from_ron_str("(time: Some(\"2011-13-04\"))").unwrap_err();
        assert!(matches!(err, FirmamentError::Time(_)));
    }

    #[test]
    fn test_start_time() {
        let config = AstronomyConfig {
            time: Some("2011-12-04T12:00:00+01:00".to_string()),
            ..Default::default()
        };
        let t = config.start_time().unwrap();
        assert_eq!((t.year, t.month, t.hour, t.utc_offset), (2011, 12, 12, 3600));

        let now = AstronomyConfig {
            utc_offset: -5 * 3600,
            ..Default::default()
        }
        .start_time()
        .unwrap();
        assert_eq!(now.utc_offset, -5 * 3600);
    }
}
