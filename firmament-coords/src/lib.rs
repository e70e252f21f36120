pub mod ecliptic;
pub mod equatorial;
pub mod frames;
pub mod horizontal;

pub use ecliptic::EclipticCoords;
pub use equatorial::EquatorialCoords;
pub use frames::{
    ecliptic_to_equatorial_matrix, equatorial_to_horizontal_matrix,
    equatorial_to_horizontal_matrix4, horizontal_to_equatorial_matrix,
};
pub use horizontal::{AzimuthConvention, HorizontalCoords};

pub use firmament_core::{ObserverLocation, Vector3};
