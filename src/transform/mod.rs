//! # Row-Vector Matrix Collaborator
//!
//! `Vector3::multiply_4x4` carries no matrix logic. It hands the vector to a
//! 4×4 matrix through the [`LeftMultiply1x3`] trait, which any host matrix
//! type can implement.
//!
//! ## Row-Vector Convention
//!
//! The vector is extended to `[x, y, z, 1]` and multiplied as a 1×4 row on
//! the left of the matrix, so translations live in the bottom row:
//!
//! ```text
//!                  | m00 m01 m02 m03 |
//! [x y z 1]   ×    | m10 m11 m12 m13 |   =   [x' y' z' w]
//!                  | m20 m21 m22 m23 |
//!                  | m30 m31 m32 m33 |
//! ```
//!
//! If `w` is not 1 the result is divided by `w`.
//!
//! Implementations are provided for `nalgebra::Matrix4<f64>` and for a flat
//! row-major `[f64; 16]`.

use log::trace;
use nalgebra::{Matrix4, RowVector4};

use crate::vector::Vector3;

/// A 4×4 matrix that can left-multiply a 1×3 row vector
pub trait LeftMultiply1x3 {
    /// Returns `[v.x, v.y, v.z, 1] × self`, projected back to 3D
    fn left_multiply_1x3_vector(&self, v: &Vector3) -> Vector3;
}

impl LeftMultiply1x3 for Matrix4<f64> {
    fn left_multiply_1x3_vector(&self, v: &Vector3) -> Vector3 {
        let row = RowVector4::new(v.x(), v.y(), v.z(), 1.0);
        let product = row * self;
        let (x, y, z, w) = (product[0], product[1], product[2], product[3]);

        if w != 1.0 {
            trace!("projective divide by w = {}", w);
            let inv_w = 1.0 / w;
            Vector3::new_unchecked(x * inv_w, y * inv_w, z * inv_w)
        } else {
            Vector3::new_unchecked(x, y, z)
        }
    }
}

/// Flat row-major elements, `m[row * 4 + col]`
impl LeftMultiply1x3 for [f64; 16] {
    fn left_multiply_1x3_vector(&self, v: &Vector3) -> Vector3 {
        Matrix4::from_row_slice(self).left_multiply_1x3_vector(v)
    }
}
