pub mod fields;
pub mod vector3;

pub use fields::VectorFields;
pub use vector3::Vector3;
