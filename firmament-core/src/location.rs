//! Observer location on the Earth's surface.
//!
//! - **Latitude**: north positive, degrees, [-90, 90]
//! - **Longitude**: east positive, degrees, [-180, 180]
//! - **Altitude**: metres above mean sea level (informational; the sky models
//!   are geocentric apart from the observer's horizon)
//!
//! The sky engine never fails on a bad observer: [`ObserverLocation::new`]
//! and every setter clamp into range. Use [`ObserverLocation::checked`] where
//! out-of-range input should be reported instead.
//!
//! ```
//! use firmament_core::ObserverLocation;
//!
//! let berlin = ObserverLocation::new(52.5167, 13.4, 34.0);
//! assert_eq!(berlin.latitude(), 52.5167);
//!
//! let clamped = ObserverLocation::new(95.0, -200.0, 0.0);
//! assert_eq!((clamped.latitude(), clamped.longitude()), (90.0, -180.0));
//! ```

use crate::constants::DEG_TO_RAD;
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::utils::{clamp_longitude, normalize_latitude};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "LocationRepr", into = "LocationRepr"))]
pub struct ObserverLocation {
    latitude: f64,
    longitude: f64,
    altitude_m: f64,
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude_m: 0.0,
        }
    }
}

fn sanitize(operation: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("{}: non-finite value {} replaced by 0", operation, value);
        0.0
    }
}

impl ObserverLocation {
    /// Creates a location, clamping latitude and longitude into range.
    ///
    /// Non-finite values are replaced by zero.
    pub fn new(latitude: f64, longitude: f64, altitude_m: f64) -> Self {
        let mut location = Self::default();
        location.set_latitude(latitude);
        location.set_longitude(longitude);
        location.set_altitude(altitude_m);
        location
    }

    /// Creates a location, rejecting non-finite or out-of-range coordinates.
    pub fn checked(latitude: f64, longitude: f64, altitude_m: f64) -> AstroResult<Self> {
        for (name, value) in [
            ("latitude", latitude),
            ("longitude", longitude),
            ("altitude", altitude_m),
        ] {
            if !value.is_finite() {
                return Err(AstroError::math_error(
                    "location_validation",
                    MathErrorKind::InvalidInput,
                    &format!("{} must be finite", name),
                ));
            }
        }
        if latitude.abs() > 90.0 {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Latitude outside valid range [-90, 90]",
            ));
        }
        if longitude.abs() > 180.0 {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Longitude outside valid range [-180, 180]",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
            altitude_m,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn altitude(&self) -> f64 {
        self.altitude_m
    }

    #[inline]
    pub fn latitude_rad(&self) -> f64 {
        self.latitude * DEG_TO_RAD
    }

    #[inline]
    pub fn longitude_rad(&self) -> f64 {
        self.longitude * DEG_TO_RAD
    }

    /// Sets the latitude, clamped to [-90°, 90°]; returns the stored value.
    pub fn set_latitude(&mut self, latitude: f64) -> f64 {
        self.latitude = normalize_latitude(sanitize("set_latitude", latitude));
        self.latitude
    }

    /// Sets the longitude, clamped to [-180°, 180°]; returns the stored value.
    pub fn set_longitude(&mut self, longitude: f64) -> f64 {
        self.longitude = clamp_longitude(sanitize("set_longitude", longitude));
        self.longitude
    }

    pub fn set_altitude(&mut self, altitude_m: f64) -> f64 {
        self.altitude_m = sanitize("set_altitude", altitude_m);
        self.altitude_m
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LocationRepr {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude_m: f64,
}

#[cfg(feature = "serde")]
impl From<LocationRepr> for ObserverLocation {
    fn from(repr: LocationRepr) -> Self {
        Self::new(repr.latitude, repr.longitude, repr.altitude_m)
    }
}

#[cfg(feature = "serde")]
impl From<ObserverLocation> for LocationRepr {
    fn from(location: ObserverLocation) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            altitude_m: location.altitude_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_silently() {
        let loc = ObserverLocation::new(91.0, 181.0, 10.0);
        assert_eq!(loc.latitude(), 90.0);
        assert_eq!(loc.longitude(), 180.0);
        assert_eq!(loc.altitude(), 10.0);

        let loc = ObserverLocation::new(-100.0, -500.0, 0.0);
        assert_eq!(loc.latitude(), -90.0);
        assert_eq!(loc.longitude(), -180.0);
    }

    #[test]
    fn test_setters_clamp_and_return_stored_value() {
        let mut loc = ObserverLocation::default();
        assert_eq!(loc.set_latitude(123.0), 90.0);
        assert_eq!(loc.set_longitude(-181.0), -180.0);
        assert_eq!(loc.set_latitude(45.5), 45.5);
        assert_eq!(loc.latitude(), 45.5);
    }

    #[test]
    fn test_non_finite_replaced() {
        let loc = ObserverLocation::new(f64::NAN, f64::INFINITY, f64::NAN);
        assert_eq!(loc, ObserverLocation::default());
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(ObserverLocation::checked(52.5, 13.4, 0.0).is_ok());
        assert!(ObserverLocation::checked(90.5, 0.0, 0.0).is_err());
        assert!(ObserverLocation::checked(0.0, -180.5, 0.0).is_err());
        assert!(ObserverLocation::checked(0.0, 0.0, f64::NAN).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_clamps_on_deserialize() {
        let loc: ObserverLocation =
            serde_json::from_str(r#"{"latitude": 100.0, "longitude": 13.4}"#).unwrap();
        assert_eq!(loc.latitude(), 90.0);
        assert_eq!(loc.altitude(), 0.0);

        let json = serde_json::to_string(&ObserverLocation::new(52.5, 13.4, 34.0)).unwrap();
        let back: ObserverLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ObserverLocation::new(52.5, 13.4, 34.0));
    }
}
