pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;
pub mod matrix;
pub mod precision;
pub mod utils;

pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::ObserverLocation;
pub use matrix::{Matrix4, RotationMatrix3, Vector3};
pub use precision::Precision;
