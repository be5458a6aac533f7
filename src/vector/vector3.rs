//! # Immutable 3D Vector
//!
//! This module provides `Vector3`, the point/direction primitive used by the
//! solid-modeling code. A `Vector3` is a plain `Copy` value: every operation
//! returns a new vector and nothing ever changes one in place.
//!
//! ## Immutability
//!
//! The components are private and there are no setters. Code holding a
//! `Vector3` can share it freely without defensive copies. Writing a
//! component is rejected by the compiler:
//!
//! ```rust,compile_fail
//! use csgvec::Vector3;
//!
//! let v = Vector3::new(1.0, 2.0, 3.0).unwrap();
//! v.x = 4.0;
//! ```
//!
//! ## Two Construction Tiers
//!
//! - **Validating** (`new`, `from_xy`, `splat`, `from_slice`, `from_fields`,
//!   `TryFrom`, `FromStr`, serde): every component is checked to be finite,
//!   otherwise `VectorError::InvalidArgument` is returned. Use this for any
//!   external input.
//! - **Unchecked** (`new_unchecked`): no validation at all. All arithmetic in
//!   this module goes through it, since its inputs are already vectors.
//!
//! ## Floating Point Edge Cases
//!
//! Arithmetic follows IEEE 754 without special handling: dividing by zero or
//! taking the `unit()` of the zero vector yields infinite or NaN components.
//!
//! ## Examples
//!
//! ```rust
//! use csgvec::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0).unwrap();
//! let b = Vector3::new(0.0, 1.0, 0.0).unwrap();
//!
//! assert_eq!(a.cross(&b), Vector3::Z);
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.plus(&b).times(2.0), Vector3::new(2.0, 2.0, 0.0).unwrap());
//! ```

use std::fmt;

use log::debug;
use nalgebra as na;
use serde::{Deserialize, Serialize};

use super::fields::{VectorFields, VectorRepr};
use crate::errors::{invalid_argument, Result, VectorError};
use crate::transform::LeftMultiply1x3;

/// Immutable three-dimensional vector of `f64` components
///
/// Represents either a point or a direction; the interpretation is up to
/// the caller.
///
/// Serializes as a keyed map `{"x": .., "y": .., "z": ..}`. Deserialization
/// is validating and also accepts `[x, y]`, `[x, y, z]`, a map without `z`,
/// or a bare number (broadcast to all components).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VectorRepr")]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

/// Checks that a single component is a finite number
fn finite(axis: char, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("rejecting vector: {} component {} is not finite", axis, value);
        Err(invalid_argument(format!(
            "{} component is not a finite number: {}",
            axis, value
        )))
    }
}

/// Smaller of two components; NaN if either is NaN, and `-0.0` below `0.0`
fn component_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == b {
        if a.is_sign_negative() {
            a
        } else {
            b
        }
    } else if a < b {
        a
    } else {
        b
    }
}

/// Larger of two components; NaN if either is NaN, and `0.0` above `-0.0`
fn component_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == b {
        if a.is_sign_positive() {
            a
        } else {
            b
        }
    } else if a > b {
        a
    } else {
        b
    }
}

impl Vector3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vector3 = Vector3::new_unchecked(0.0, 0.0, 0.0);
    /// Unit vector along the x axis
    pub const X: Vector3 = Vector3::new_unchecked(1.0, 0.0, 0.0);
    /// Unit vector along the y axis
    pub const Y: Vector3 = Vector3::new_unchecked(0.0, 1.0, 0.0);
    /// Unit vector along the z axis
    pub const Z: Vector3 = Vector3::new_unchecked(0.0, 0.0, 1.0);

    /// Creates a vector from three components, validating each one
    ///
    /// # Errors
    ///
    /// `VectorError::InvalidArgument` if any component is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csgvec::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0).unwrap();
    /// assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
    ///
    /// assert!(Vector3::new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Vector3 {
            x: finite('x', x)?,
            y: finite('y', y)?,
            z: finite('z', z)?,
        })
    }

    /// Creates a vector from x and y, with z = 0
    pub fn from_xy(x: f64, y: f64) -> Result<Self> {
        Self::new(x, y, 0.0)
    }

    /// Creates a vector with all three components set to `value`
    ///
    /// ```rust
    /// use csgvec::Vector3;
    ///
    /// let v = Vector3::splat(2.5).unwrap();
    /// assert_eq!(v.to_array(), [2.5, 2.5, 2.5]);
    /// ```
    pub fn splat(value: f64) -> Result<Self> {
        Self::new(value, value, value)
    }

    /// Copies an existing vector
    ///
    /// Equivalent to `*other`; present so that every construction shape has
    /// a named entry point.
    pub fn from_vector(other: &Vector3) -> Self {
        *other
    }

    /// Creates a vector from a slice of 2 or 3 components
    ///
    /// A 2-element slice sets z = 0.
    ///
    /// # Errors
    ///
    /// `VectorError::InvalidArgument` for any other length, or if a component
    /// is not finite.
    ///
    /// ```rust
    /// use csgvec::Vector3;
    ///
    /// assert_eq!(
    ///     Vector3::from_slice(&[1.0, 2.0]).unwrap(),
    ///     Vector3::new(1.0, 2.0, 0.0).unwrap()
    /// );
    /// assert!(Vector3::from_slice(&[1.0]).is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y] => Self::from_xy(x, y),
            [x, y, z] => Self::new(x, y, z),
            _ => {
                debug!("rejecting vector: {} components given", values.len());
                Err(invalid_argument(format!(
                    "expected 2 or 3 components, got {}",
                    values.len()
                )))
            }
        }
    }

    /// Creates a vector from a keyed structure with `x`, `y` and optional `z`
    ///
    /// A missing `z` defaults to 0.
    pub fn from_fields(fields: &VectorFields) -> Result<Self> {
        Self::new(fields.x, fields.y, fields.z.unwrap_or(0.0))
    }

    /// Creates a vector without validating the components
    ///
    /// This is the fast path for hot loops over data that is already known to
    /// be valid. Never feed it unvalidated external input: the finite-component
    /// guarantee of the validating constructors does not hold for vectors built
    /// here.
    ///
    /// ```rust
    /// use csgvec::Vector3;
    ///
    /// const UP: Vector3 = Vector3::new_unchecked(0.0, 0.0, 1.0);
    /// assert_eq!(UP, Vector3::Z);
    /// ```
    #[inline]
    pub const fn new_unchecked(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// X component
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z)
    }

    /// Returns (−x, −y, −z)
    pub fn negated(&self) -> Vector3 {
        Vector3::new_unchecked(-self.x, -self.y, -self.z)
    }

    /// Component-wise absolute value
    pub fn abs(&self) -> Vector3 {
        Vector3::new_unchecked(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise sum
    pub fn plus(&self, other: &Vector3) -> Vector3 {
        Vector3::new_unchecked(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference `self - other`
    pub fn minus(&self, other: &Vector3) -> Vector3 {
        Vector3::new_unchecked(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales every component by `scalar`
    pub fn times(&self, scalar: f64) -> Vector3 {
        Vector3::new_unchecked(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Divides every component by `scalar`
    ///
    /// Division by zero is not special-cased and produces infinite or NaN
    /// components.
    pub fn divided_by(&self, scalar: f64) -> Vector3 {
        Vector3::new_unchecked(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Dot product
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// The result is perpendicular to both inputs (right-hand rule).
    ///
    /// ```rust
    /// use csgvec::Vector3;
    ///
    /// assert_eq!(Vector3::Y.cross(&Vector3::Z), Vector3::X);
    /// assert_eq!(Vector3::Z.cross(&Vector3::X), Vector3::Y);
    /// ```
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new_unchecked(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean length, `self.dot(self)`
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length
    ///
    /// ```rust
    /// use csgvec::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).unwrap().length(), 5.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Vector of length 1 in the same direction
    ///
    /// Unlike a checked normalisation this does not guard against the zero
    /// vector, which yields NaN components.
    pub fn unit(&self) -> Vector3 {
        self.divided_by(self.length())
    }

    /// Linear interpolation `self + (target - self) * t`
    ///
    /// `t = 0` gives `self`; `t = 1` gives `target` up to rounding.
    pub fn lerp(&self, target: &Vector3, t: f64) -> Vector3 {
        self.plus(&target.minus(self).times(t))
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Vector3) -> f64 {
        self.minus(other).length()
    }

    /// Squared Euclidean distance to `other`
    pub fn distance_to_squared(&self, other: &Vector3) -> f64 {
        self.minus(other).length_squared()
    }

    /// Exact component-wise equality, no tolerance
    ///
    /// Same as `==`. As with any IEEE comparison, `0.0` equals `-0.0` and a
    /// NaN component never compares equal.
    pub fn equals(&self, other: &Vector3) -> bool {
        self == other
    }

    /// Component-wise minimum
    ///
    /// A NaN in either operand gives NaN in that component, and `-0.0` is
    /// treated as smaller than `0.0`.
    pub fn min(&self, other: &Vector3) -> Vector3 {
        Vector3::new_unchecked(
            component_min(self.x, other.x),
            component_min(self.y, other.y),
            component_min(self.z, other.z),
        )
    }

    /// Component-wise maximum
    ///
    /// A NaN in either operand gives NaN in that component, and `0.0` is
    /// treated as larger than `-0.0`.
    pub fn max(&self, other: &Vector3) -> Vector3 {
        Vector3::new_unchecked(
            component_max(self.x, other.x),
            component_max(self.y, other.y),
            component_max(self.z, other.z),
        )
    }

    /// Returns a coordinate axis that is guaranteed not to be parallel to self
    ///
    /// Picks the axis of the smallest absolute component, breaking ties in the
    /// order x, y, z. Crossing the result with `self` gives a seed for building
    /// an orthogonal basis.
    ///
    /// ```rust
    /// use csgvec::Vector3;
    ///
    /// let v = Vector3::new(5.0, 1.0, 2.0).unwrap();
    /// assert_eq!(v.random_non_parallel_vector(), Vector3::Y);
    /// ```
    pub fn random_non_parallel_vector(&self) -> Vector3 {
        let abs = self.abs();
        if abs.x <= abs.y && abs.x <= abs.z {
            Vector3::X
        } else if abs.y <= abs.x && abs.y <= abs.z {
            Vector3::Y
        } else {
            Vector3::Z
        }
    }

    /// Multiplies this vector, as a row vector, on the left of a 4×4 matrix
    ///
    /// All the matrix logic lives in the collaborator; see
    /// [`LeftMultiply1x3`].
    ///
    /// ```rust
    /// use csgvec::Vector3;
    /// use nalgebra::Matrix4;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0).unwrap();
    /// assert_eq!(v.multiply_4x4(&Matrix4::<f64>::identity()), v);
    /// ```
    pub fn multiply_4x4<M>(&self, matrix: &M) -> Vector3
    where
        M: LeftMultiply1x3 + ?Sized,
    {
        matrix.left_multiply_1x3_vector(self)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Vector3::from_slice(values)
    }
}

impl TryFrom<[f64; 2]> for Vector3 {
    type Error = VectorError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self> {
        Vector3::from_xy(x, y)
    }
}

impl TryFrom<[f64; 3]> for Vector3 {
    type Error = VectorError;

    fn try_from([x, y, z]: [f64; 3]) -> Result<Self> {
        Vector3::new(x, y, z)
    }
}

impl TryFrom<(f64, f64)> for Vector3 {
    type Error = VectorError;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Vector3::from_xy(x, y)
    }
}

impl TryFrom<(f64, f64, f64)> for Vector3 {
    type Error = VectorError;

    fn try_from((x, y, z): (f64, f64, f64)) -> Result<Self> {
        Vector3::new(x, y, z)
    }
}

impl TryFrom<VectorFields> for Vector3 {
    type Error = VectorError;

    fn try_from(fields: VectorFields) -> Result<Self> {
        Vector3::from_fields(&fields)
    }
}

impl TryFrom<na::Vector3<f64>> for Vector3 {
    type Error = VectorError;

    fn try_from(vec: na::Vector3<f64>) -> Result<Self> {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.to_vector3()
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

// Operator forms of the named operations
impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        self.plus(&other)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        self.minus(&other)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.negated()
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.times(scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v.times(self)
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        self.divided_by(scalar)
    }
}

impl std::iter::Sum for Vector3 {
    fn sum<I: Iterator<Item = Vector3>>(iter: I) -> Vector3 {
        iter.fold(Vector3::ZERO, |acc, v| acc.plus(&v))
    }
}
