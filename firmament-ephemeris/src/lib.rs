pub mod earth;
pub mod eclipse;
pub mod lunar_orientation;
mod lunar_terms;
pub mod moon;
pub mod nutation;
mod nutation_terms;
pub mod stars;
pub mod sun;

pub use earth::{
    apparent_angular_diameter, atmospheric_refraction, longitude_nutation, mean_obliquity,
    obliquity_nutation, observer_sidereal_time, orbit_eccentricity, true_obliquity,
    view_distance_within_atmosphere,
};
pub use eclipse::{
    lunar_eclipse, solar_overlap, LunarEclipse, LunarEclipseKind, SolarOverlap, SolarOverlapKind,
};
pub use lunar_orientation::{
    illuminated_fraction, optical_librations, parallactic_angle, phase_angle, position_angle,
    Librations, LunarOrientation,
};
pub use moon::{LunarArguments, Moon};
pub use nutation::{nutation, Nutation};
pub use stars::Star;
pub use sun::Sun;

pub use firmament_core::Precision;
