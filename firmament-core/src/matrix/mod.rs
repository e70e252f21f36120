mod matrix4;
mod rotation_matrix;
mod vector3;

pub use matrix4::Matrix4;
pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
