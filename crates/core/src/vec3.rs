//! Immutable 3D vector value type with validated construction.
//!
//! `Vec3` is the core of this crate: a triple of finite `f64` coordinates
//! with componentwise arithmetic, dot product, scaling, Euclidean length,
//! exact equality, and length ordering. Coordinates are private and only
//! reachable through validated constructors, so a `Vec3` obtained safely
//! is always finite.

use std::cmp::Ordering;
use std::fmt;
use std::io::{BufRead, Write};
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Error};
use crate::input::prompt_finite;

/// A 3D vector of finite `f64` coordinates.
///
/// Value semantics throughout: `Copy`, exact componentwise `PartialEq`,
/// `Default` is the zero vector. Addition and subtraction are the `+` and
/// `-` operators; operating on a non-vector operand is unrepresentable by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from three coordinates.
    ///
    /// Rejects any non-finite coordinate with [`Error::InvalidArgument`]
    /// naming the offending axis.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, Error> {
        Ok(Vec3 {
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
            z: ensure_finite("z", z)?,
        })
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure all three coordinates are finite.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The z coordinate.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Dot product: sum of componentwise products.
    #[inline]
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Componentwise multiply by a scalar.
    ///
    /// Rejects a non-finite scalar with [`Error::InvalidArgument`].
    pub fn scale(&self, scalar: f64) -> Result<Self, Error> {
        let scalar = ensure_finite("scalar", scalar)?;
        Ok(Vec3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        })
    }

    /// Euclidean norm, `sqrt(x² + y² + z²)`.
    ///
    /// Never negative; zero only for the zero vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Order two vectors by Euclidean length.
    ///
    /// `Less`, `Equal`, or `Greater` according to the sign of
    /// `self.length() - other.length()`, using `f64::total_cmp`.
    pub fn compare_length(&self, other: &Vec3) -> Ordering {
        self.length().total_cmp(&other.length())
    }

    /// Build a vector from three sequential numeric prompts.
    ///
    /// Writes `Enter x: `, `Enter y: `, `Enter z: ` to `output` and parses
    /// one line from `input` for each. Returns a new vector instead of
    /// mutating in place; on malformed input the error identifies the
    /// offending coordinate and no vector is produced.
    pub fn read_from<R, W>(input: &mut R, output: &mut W) -> Result<Self, Error>
    where
        R: BufRead,
        W: Write,
    {
        let x = prompt_finite(input, output, "x")?;
        let y = prompt_finite(input, output, "y")?;
        let z = prompt_finite(input, output, "z")?;
        Self::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3D(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_finite_coordinates() {
        let v = Vec3::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn new_rejects_nan_coordinate() {
        let err = Vec3::new(1.0, f64::NAN, 3.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "y", .. }));
    }

    #[test]
    fn new_rejects_infinite_coordinate() {
        let err = Vec3::new(f64::INFINITY, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "x", .. }));
    }

    #[test]
    fn default_is_zero_vector() {
        assert_eq!(Vec3::default(), Vec3::ZERO);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn addition_is_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0).unwrap();
        let b = Vec3::new(4.0, 5.0, 6.0).unwrap();
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0).unwrap());
    }

    #[test]
    fn subtraction_is_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0).unwrap();
        let b = Vec3::new(4.0, 5.0, 6.0).unwrap();
        assert_eq!(a - b, Vec3::new(-3.0, -3.0, -3.0).unwrap());
    }

    #[test]
    fn dot_product_matches_hand_computation() {
        let a = Vec3::new(1.0, 2.0, 3.0).unwrap();
        let b = Vec3::new(4.0, 5.0, 6.0).unwrap();
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn scale_rejects_non_finite_scalar() {
        let v = Vec3::new(1.0, 2.0, 3.0).unwrap();
        let err = v.scale(f64::NAN).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "scalar", .. }));
    }

    #[test]
    fn compare_length_orders_by_norm() {
        let short = Vec3::new(1.0, 2.0, 3.0).unwrap();
        let long = Vec3::new(4.0, 5.0, 6.0).unwrap();
        assert_eq!(short.compare_length(&long), Ordering::Less);
        assert_eq!(long.compare_length(&short), Ordering::Greater);
        assert_eq!(short.compare_length(&short), Ordering::Equal);
    }

    #[test]
    fn display_matches_expected_shape() {
        let v = Vec3::new(1.0, 2.5, -3.0).unwrap();
        assert_eq!(v.to_string(), "Vector3D(x=1, y=2.5, z=-3)");
    }
}
