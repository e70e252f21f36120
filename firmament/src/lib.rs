//! Astronomical positions for procedural sky rendering.
//!
//! [`Astronomy`] evaluates the sun, moon and star sphere for one instant and
//! observer without holding state. [`CachedAstronomy`] memoizes that result
//! for hosts that query every frame, and [`AstronomyConfig`] loads settings
//! from RON.
//!
//! ```
//! use firmament::{Astronomy, CalendarTime, ObserverLocation, Precision};
//!
//! let berlin = ObserverLocation::new(52.5167, 13.4, 34.0);
//! let noon = CalendarTime::new(2011, 12, 4.0, 12, 0, 0.0, 3600);
//! let sky = Astronomy::new(Precision::High).evaluate(&noon, &berlin);
//!
//! assert!((sky.sun.horizontal.azimuth() - 180.0).abs() < 1.0);
//! assert!(sky.sun.horizontal.altitude() > 14.0);
//! ```

pub mod astronomy;
pub mod cache;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;

pub use astronomy::{Astronomy, BodyState, SkyState};
pub use cache::CachedAstronomy;
#[cfg(feature = "serde")]
pub use config::AstronomyConfig;
pub use error::{FirmamentError, FirmamentResult};

pub use firmament_coords::{AzimuthConvention, EclipticCoords, EquatorialCoords, HorizontalCoords};
pub use firmament_core::{Matrix4, ObserverLocation, Precision, RotationMatrix3, Vector3};
pub use firmament_ephemeris::{LunarEclipseKind, Moon, SolarOverlapKind, Star, Sun};
pub use firmament_time::{CalendarTime, JulianDay, TimeError};
