//! Keyed, serialized and textual input forms for `Vector3`
//!
//! Everything here funnels into the validating constructors, so every path
//! rejects non-finite components the same way.
//!
//! The deserialization shapes are an internal detail; only `VectorFields` is
//! public:
//!
//! ```rust,compile_fail
//! use csgvec::vector::fields::VectorRepr;
//! ```

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::vector3::Vector3;
use crate::errors::{invalid_argument, Result, VectorError};

/// Keyed structure with public `x`, `y` and optional `z` fields
///
/// Mirrors the `{x, y}` / `{x, y, z}` object shape. A missing `z` means 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorFields {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl From<Vector3> for VectorFields {
    fn from(v: Vector3) -> Self {
        VectorFields {
            x: v.x(),
            y: v.y(),
            z: Some(v.z()),
        }
    }
}

/// Every shape accepted when deserializing a `Vector3`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum VectorRepr {
    /// `[x, y]` or `[x, y, z]`
    Components(Vec<f64>),
    /// `{"x": .., "y": ..}` with optional `"z"`
    Fields(VectorFields),
    /// A bare number broadcast to all components
    Splat(f64),
}

impl TryFrom<VectorRepr> for Vector3 {
    type Error = VectorError;

    fn try_from(repr: VectorRepr) -> Result<Self> {
        match repr {
            VectorRepr::Components(values) => Vector3::from_slice(&values),
            VectorRepr::Fields(fields) => Vector3::from_fields(&fields),
            VectorRepr::Splat(value) => Vector3::splat(value),
        }
    }
}

/// Parses one numeric token
fn parse_component(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|e| {
        debug!("rejecting vector component {:?}: {}", token, e);
        invalid_argument(format!("not a number: {:?}", token))
    })
}

/// Parses `"1, 2, 3"`, `"(1 2)"`, `"[1,2,3]"` or a single `"4"`
///
/// Components may be separated by commas, whitespace or both. One value is
/// broadcast, two values set z = 0, three are taken as-is. A comma with no
/// number on one side (`"1,,2"`, `"1,2,"`) is rejected.
///
/// ```rust
/// use csgvec::Vector3;
///
/// let v: Vector3 = "(1, 2, 3)".parse().unwrap();
/// assert_eq!(v, Vector3::new(1.0, 2.0, 3.0).unwrap());
///
/// let flat: Vector3 = "[4 5]".parse().unwrap();
/// assert_eq!(flat.z(), 0.0);
///
/// assert!("1, two, 3".parse::<Vector3>().is_err());
/// ```
impl FromStr for Vector3 {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .or_else(|| {
                trimmed
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
            })
            .unwrap_or(trimmed);

        let mut values = Vec::new();
        if !inner.trim().is_empty() {
            for segment in inner.split(',') {
                let mut tokens = segment.split_whitespace().peekable();
                if tokens.peek().is_none() {
                    debug!("rejecting vector {:?}: empty component between commas", s);
                    return Err(invalid_argument(format!("empty component in {:?}", s)));
                }
                for token in tokens {
                    values.push(parse_component(token)?);
                }
            }
        }

        match values.as_slice() {
            [value] => Vector3::splat(*value),
            [] => Err(invalid_argument(format!("no components in {:?}", s))),
            other => Vector3::from_slice(other),
        }
    }
}
