//! # 2D vector value type
//!
//! A plain `(x, y)` value with chainable operations. Every operation
//! consumes and returns the vector by value, so chains read the same way
//! the mutating original did without sharing any state:
//!
//! ```
//! use easel_core::Vector;
//!
//! let v = Vector::new(3.0, 4.0).scale(2.0).neg_y();
//! assert_eq!(v, Vector::new(6.0, -8.0));
//! ```
//!
//! Two pieces of historical behavior are worth knowing about:
//!
//! - [`Vector::normalize`] divides by the *squared* magnitude, not the
//!   magnitude. It is kept byte-for-byte compatible with the original
//!   numeric behavior rather than doing true unit normalization.
//! - [`Vector::rotate`] applies the standard rotation matrix to the
//!   original components. (An earlier revision fed the already-rotated
//!   x into the y computation; that is fixed here.)

use crate::math::{self, RAD_TO_DEG};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// The direction of a vector, in both radians and degrees.
///
/// `deg` stays in roughly (-180, 180]; there is no wraparound to [0, 360).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heading {
    pub rad: f32,
    pub deg: f32,
}

/// A 2D vector with value semantics.
///
/// Copies are independent; there is no identity beyond the component
/// values. The default is the zero vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create from a glam Vec2.
    pub fn from_vec2(vec: Vec2) -> Self {
        Self { x: vec.x, y: vec.y }
    }

    /// Get the components as a glam Vec2.
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Negates both components.
    pub fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Negates the x component only.
    pub fn neg_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Negates the y component only.
    pub fn neg_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Multiplies both components by `k`.
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Scales by the reciprocal of the **squared** magnitude.
    ///
    /// This is not unit normalization: a vector of length 2 comes out
    /// with length 0.5. The original behaved this way and callers tuned
    /// their constants against it, so it is reproduced exactly. The zero
    /// vector is returned unchanged.
    pub fn normalize(self) -> Self {
        let mag_sq = self.x * self.x + self.y * self.y;
        if mag_sq != 0.0 {
            self.scale(1.0 / mag_sq)
        } else {
            self
        }
    }

    /// Component-wise sum with another vector.
    pub fn add(self, v: Vector) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    /// Component-wise difference with another vector.
    pub fn sub(self, v: Vector) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    /// Returns the direction of the vector relative to the positive
    /// x-axis, in radians and degrees.
    pub fn heading(&self) -> Heading {
        let rad = self.y.atan2(self.x);
        Heading {
            rad,
            deg: rad * RAD_TO_DEG,
        }
    }

    /// Points the vector in the direction `rad` while preserving its
    /// magnitude.
    pub fn set_heading(self, rad: f32) -> Self {
        let mag = self.mag();
        Self::new(rad.cos() * mag, rad.sin() * mag)
    }

    /// Rotates by `rad` using the standard 2D rotation matrix.
    pub fn rotate(self, rad: f32) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    /// Scalar dot product.
    pub fn dot(&self, v: Vector) -> f32 {
        self.x * v.x + self.y * v.y
    }

    /// Euclidean norm.
    pub fn mag(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Resamples each component uniformly in [-1, 1).
    ///
    /// This is per-axis uniform, not a uniform random direction; headings
    /// bias toward the square's corners.
    pub fn random(self, rng: &mut impl Rng) -> Self {
        Self::new(
            rng.random::<f32>() * 2.0 - 1.0,
            rng.random::<f32>() * 2.0 - 1.0,
        )
    }

    /// Euclidean distance to another vector.
    pub fn distance_to(&self, v: Vector) -> f32 {
        math::distance(self.x, self.y, v.x, v.y)
    }

    /// The angle of the line from this vector to `v`.
    pub fn angle_to(&self, v: Vector) -> f32 {
        (v.y - self.y).atan2(v.x - self.x)
    }

    /// Resets both components to zero.
    pub fn stop(self) -> Self {
        Self::ZERO
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector::add(self, other)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector::sub(self, other)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Vector::neg(self)
    }
}

impl From<Vec2> for Vector {
    fn from(vec: Vec2) -> Self {
        Self::from_vec2(vec)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        v.as_vec2()
    }
}
