//! csgvec: immutable 3D vector primitive for constructive solid geometry
//!
//! This crate provides the point/direction value type consumed by CSG
//! polygon and boolean code, along with the seam through which a host 4×4
//! matrix type transforms it.
//!
//! ```rust
//! use csgvec::Vector3;
//!
//! let normal = Vector3::new(0.0, 0.0, 2.0).unwrap().unit();
//! let seed = normal.random_non_parallel_vector();
//! let tangent = normal.cross(&seed).unit();
//!
//! assert_eq!(normal.dot(&tangent), 0.0);
//! ```

pub mod errors;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use errors::{Result, VectorError};
pub use transform::LeftMultiply1x3;
pub use vector::{Vector3, VectorFields};
